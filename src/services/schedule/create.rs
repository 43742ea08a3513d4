use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScheduleService, assemble_schedule};
use crate::middlewares::RequireJWT;
use crate::models::schedule::grid::{PlacementCandidate, validate_placement};
use crate::models::schedule::requests::{CreateScheduleItemRequest, ScheduleItemFilter};
use crate::models::schedule::responses::ScheduleItemResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_item(
    service: &ScheduleService,
    request: &HttpRequest,
    item_data: CreateScheduleItemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 解析本次写入归属的教师
    let teacher_id = match resolve_target_teacher(request, &storage, item_data.teacher_id).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    // 基于该教师现有课表校验落点
    let schedule = match assemble_schedule(
        &storage,
        ScheduleItemFilter {
            teacher_id: Some(teacher_id),
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

    let candidate = PlacementCandidate {
        subject_id: item_data.subject_id,
        classroom_id: item_data.classroom_id,
        room: item_data.room.clone(),
        day: item_data.day,
        start_time: item_data.start_time,
        duration: item_data.duration,
    };

    if !validate_placement(&candidate, &schedule, None) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ScheduleConflict,
            "Placement is invalid or overlaps an existing period",
        )));
    }

    match storage.create_schedule_item(teacher_id, item_data).await {
        Ok(item) => {
            info!(
                "Schedule item {} created for teacher {} (day {}, period {})",
                item.id, teacher_id, item.day, item.start_time
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ScheduleItemResponse { item },
                "Schedule item created successfully",
            )))
        }
        Err(e) => {
            error!("Schedule item creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Schedule item creation failed: {e}"),
                )),
            )
        }
    }
}

/// 确定写入归属的教师：教师用本人记录，管理员必须显式指定
pub(crate) async fn resolve_target_teacher(
    request: &HttpRequest,
    storage: &Arc<dyn Storage>,
    requested_teacher_id: Option<i64>,
) -> Result<i64, HttpResponse> {
    let role = RequireJWT::extract_user_role(request);
    let uid = RequireJWT::extract_user_id(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        ))
    })?;

    match role {
        Some(UserRole::Teacher) => match storage.get_teacher_by_user_id(uid).await {
            Ok(Some(teacher)) => {
                // 教师指定了别人的 ID 则拒绝
                if let Some(requested) = requested_teacher_id
                    && requested != teacher.id
                {
                    return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::PermissionDenied,
                        "You cannot modify another teacher's schedule",
                    )));
                }
                Ok(teacher.id)
            }
            Ok(None) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Account is not linked to a teacher record",
            ))),
            Err(e) => {
                error!("Failed to resolve teacher for user {}: {}", uid, e);
                Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while resolving teacher",
                    )),
                )
            }
        },
        Some(UserRole::Admin) => match requested_teacher_id {
            Some(teacher_id) => match storage.get_teacher_by_id(teacher_id).await {
                Ok(Some(_)) => Ok(teacher_id),
                Ok(None) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Teacher not found",
                ))),
                Err(e) => {
                    error!("Failed to check teacher {}: {}", teacher_id, e);
                    Err(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error while checking teacher",
                        )),
                    )
                }
            },
            None => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Admin must specify teacher_id",
            ))),
        },
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "You do not have permission to modify schedules",
        ))),
    }
}
