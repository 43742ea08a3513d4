use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScheduleService, assemble_schedule, ensure_can_modify_item};
use crate::errors::SchoolSystemError;
use crate::middlewares::RequireJWT;
use crate::models::schedule::grid::{PeriodLocator, PlacementCandidate, validate_placement};
use crate::models::schedule::requests::{ScheduleItemFilter, UpdateScheduleItemRequest};
use crate::models::schedule::responses::ScheduleItemResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_item(
    service: &ScheduleService,
    request: &HttpRequest,
    item_id: i64,
    update_data: UpdateScheduleItemRequest,
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

    // 权限：教师只能编辑自己的课
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

    // 合并出编辑后的落点
    let candidate = PlacementCandidate {
        subject_id: update_data.subject_id.unwrap_or(item.subject.id),
        classroom_id: update_data.classroom_id.unwrap_or(item.classroom.id),
        room: update_data.room.clone().unwrap_or_else(|| item.room.clone()),
        day: update_data.day.unwrap_or(item.day),
        start_time: update_data.start_time.unwrap_or(item.start_time),
        duration: update_data.duration.unwrap_or(item.duration),
    };

    // 编辑模式：跳过被编辑的原节次，允许原地保存
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
            "Placement is invalid or overlaps an existing period",
        )));
    }

    match storage.update_schedule_item(item_id, update_data).await {
        Ok(Some(item)) => {
            info!("Schedule item {} updated", item.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ScheduleItemResponse { item },
                "Schedule item updated successfully",
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
            error!("Failed to update schedule item {}: {}", item_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update schedule item: {e}"),
                )),
            )
        }
    }
}
