use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassroomService;
use crate::models::classrooms::responses::{ClassroomDetailResponse, ClassroomRosterResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 班级详情：基本信息 + 班主任 + 在册人数
pub async fn get_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let classroom = match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => {
            error!("Failed to get classroom {}: {}", classroom_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve classroom: {e}"),
                )),
            );
        }
    };

    let advisors = match storage.list_classroom_advisors(classroom_id).await {
        Ok(advisors) => advisors,
        Err(e) => {
            error!("Failed to list advisors for {}: {}", classroom_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve advisors: {e}"),
                )),
            );
        }
    };

    let student_count = match storage.count_classroom_students(classroom_id).await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count students for {}: {}", classroom_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count students: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassroomDetailResponse {
            classroom,
            advisors,
            student_count,
        },
        "Classroom retrieved successfully",
    )))
}

/// 班级花名册：按班内序号排序的学生列表
pub async fn get_classroom_roster(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let classroom = match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => {
            error!("Failed to get classroom {}: {}", classroom_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve classroom: {e}"),
                )),
            );
        }
    };

    match storage.list_classroom_students(classroom_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassroomRosterResponse {
                classroom,
                students,
            },
            "Classroom roster retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list roster for {}: {}", classroom_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve roster: {e}"),
                )),
            )
        }
    }
}
