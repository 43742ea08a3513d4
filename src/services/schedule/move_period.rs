//! 拖拽移动：携带目标 (day, start_time) 的一次更新，等价于删除+插入

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScheduleService, assemble_schedule, ensure_can_modify_item};
use crate::errors::SchoolSystemError;
use crate::middlewares::RequireJWT;
use crate::models::schedule::grid::{PeriodLocator, PlacementCandidate, validate_placement};
use crate::models::schedule::requests::{MoveScheduleItemRequest, ScheduleItemFilter};
use crate::models::schedule::responses::ScheduleItemResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn move_item(
    service: &ScheduleService,
    request: &HttpRequest,
    item_id: i64,
    move_data: MoveScheduleItemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let item = match storage.get_schedule_item_by_id(item_id).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScheduleItemNotFound,
                "Schedule item not found",
            )));
        }
        Err(e) => {
            error!("Failed to get schedule item {}: {}", item_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve schedule item: {e}"),
                )),
            );
        }
    };

    // 权限：教师只能移动自己的课
    let own_teacher_id = match RequireJWT::extract_user_id(request) {
        Some(uid) => storage
            .get_teacher_by_user_id(uid)
            .await
            .ok()
            .flatten()
            .map(|t| t.id),
        None => None,
    };
    if let Some(resp) = ensure_can_modify_item(request, own_teacher_id, item.teacher_id) {
        return Ok(resp);
    }

    // 落点保留原科目/班级/教室/时长，只换格子
    let candidate = PlacementCandidate {
        subject_id: item.subject.id,
        classroom_id: item.classroom.id,
        room: item.room.clone(),
        day: move_data.day,
        start_time: move_data.start_time,
        duration: item.duration,
    };

    let schedule = match assemble_schedule(
        &storage,
        ScheduleItemFilter {
            teacher_id: Some(item.teacher_id),
            ..Default::default()
        },
    )
    .await
    {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("Failed to assemble schedule for validation: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate placement: {e}"),
                )),
            );
        }
    };

    let excluding = PeriodLocator {
        day: item.day,
        start_time: item.start_time,
    };

    if !validate_placement(&candidate, &schedule, Some(excluding)) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ScheduleConflict,
            "Destination is invalid or overlaps an existing period",
        )));
    }

    match storage
        .move_schedule_item(item_id, move_data.day, move_data.start_time, move_data.version)
        .await
    {
        Ok(Some(item)) => {
            info!(
                "Schedule item {} moved to day {}, period {}",
                item.id, item.day, item.start_time
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ScheduleItemResponse { item },
                "Schedule item moved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleItemNotFound,
            "Schedule item not found",
        ))),
        Err(SchoolSystemError::VersionConflict(msg)) => {
            info!("Schedule item {} version conflict: {}", item_id, msg);
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ScheduleVersionConflict,
                "Schedule item was modified by another editor, reload and retry",
            )))
        }
        Err(e) => {
            error!("Failed to move schedule item {}: {}", item_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to move schedule item: {e}"),
                )),
            )
        }
    }
}
