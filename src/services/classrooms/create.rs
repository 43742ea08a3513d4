use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassroomService;
use crate::models::classrooms::requests::CreateClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_data: CreateClassroomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班号 3 位（如 405），学期 1 或 2
    if classroom_data.number < 100 || classroom_data.number > 999 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Classroom number must be a 3-digit number",
        )));
    }
    if classroom_data.semester != 1 && classroom_data.semester != 2 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Semester must be 1 or 2",
        )));
    }

    // 班主任必须都存在
    for teacher_id in &classroom_data.advisor_ids {
        match storage.get_teacher_by_id(*teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    format!("Advisor teacher {teacher_id} not found"),
                )));
            }
            Err(e) => {
                error!("Failed to check teacher {}: {}", teacher_id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while checking advisors",
                    )),
                );
            }
        }
    }

    match storage.create_classroom(classroom_data).await {
        Ok(classroom) => {
            info!("Classroom {} created", classroom.number);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                classroom,
                "Classroom created successfully",
            )))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Classroom creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ClassroomAlreadyExists,
                    "Classroom already exists for this year and semester",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Classroom creation failed: {msg}"),
                    )),
                )
            }
        }
    }
}
