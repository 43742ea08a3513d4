use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ScheduleService, assemble_schedule};
use crate::models::schedule::requests::ScheduleItemFilter;
use crate::models::schedule::responses::ScheduleResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 班级视角：该班所有科目的周课表
pub async fn get_classroom_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => {
            error!("Failed to check classroom {}: {}", classroom_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve schedule: {e}"),
                )),
            );
        }
    }

    let filter = ScheduleItemFilter {
        classroom_id: Some(classroom_id),
        ..Default::default()
    };

    // 没有任何记录时返回空网格，不视为错误
    match assemble_schedule(&storage, filter).await {
        Ok(schedule) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduleResponse { schedule },
            "Schedule retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to assemble classroom schedule: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve schedule: {e}"),
                )),
            )
        }
    }
}

/// 教师视角：该教师任教的周课表
pub async fn get_teacher_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            error!("Failed to check teacher {}: {}", teacher_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve schedule: {e}"),
                )),
            );
        }
    }

    let filter = ScheduleItemFilter {
        teacher_id: Some(teacher_id),
        ..Default::default()
    };

    match assemble_schedule(&storage, filter).await {
        Ok(schedule) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduleResponse { schedule },
            "Schedule retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to assemble teacher schedule: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve schedule: {e}"),
                )),
            )
        }
    }
}
