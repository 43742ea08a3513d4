use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_classroom(classroom_id).await {
        Ok(true) => {
            info!("Classroom {} deleted", classroom_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Classroom deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            error!("Failed to delete classroom {}: {}", classroom_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete classroom: {e}"),
                )),
            )
        }
    }
}
