use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassroomService;
use crate::models::classrooms::requests::UpdateClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
    update_data: UpdateClassroomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(number) = update_data.number
        && !(100..=999).contains(&number)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Classroom number must be a 3-digit number",
        )));
    }
    if let Some(semester) = update_data.semester
        && semester != 1
        && semester != 2
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Semester must be 1 or 2",
        )));
    }

    // 替换班主任时逐个确认存在
    if let Some(ref advisor_ids) = update_data.advisor_ids {
        for teacher_id in advisor_ids {
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
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error while checking advisors",
                        ),
                    ));
                }
            }
        }
    }

    match storage.update_classroom(classroom_id, update_data).await {
        Ok(Some(classroom)) => {
            info!("Classroom {} updated", classroom.number);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                classroom,
                "Classroom updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            error!("Failed to update classroom {}: {}", classroom_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update classroom: {e}"),
                )),
            )
        }
    }
}
