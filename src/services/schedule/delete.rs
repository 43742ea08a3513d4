use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScheduleService, ensure_can_modify_item};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_item(
    service: &ScheduleService,
    request: &HttpRequest,
    item_id: i64,
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

    // 权限：教师只能删除自己的课
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

    match storage.delete_schedule_item(item_id).await {
        Ok(true) => {
            info!("Schedule item {} deleted", item_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Schedule item deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleItemNotFound,
            "Schedule item not found",
        ))),
        Err(e) => {
            error!("Failed to delete schedule item {}: {}", item_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete schedule item: {e}"),
                )),
            )
        }
    }
}
