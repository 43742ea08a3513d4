use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_citizen_id;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if teacher_data.teacher_no.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Teacher number must not be empty",
        )));
    }
    if let Err(msg) = validate_citizen_id(&teacher_data.citizen_id) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidCitizenId, msg)));
    }

    // 科目组必须存在
    match storage.list_subject_groups().await {
        Ok(groups) => {
            if !groups.iter().any(|g| g.id == teacher_data.subject_group_id) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::SubjectGroupNotFound,
                    "Subject group not found",
                )));
            }
        }
        Err(e) => {
            error!("Failed to list subject groups: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking subject group",
                )),
            );
        }
    }

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!("Teacher {} created", teacher.teacher_no);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher created successfully")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Teacher creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TeacherAlreadyExists,
                    "Teacher number or citizen ID already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Teacher creation failed: {msg}"),
                    )),
                )
            }
        }
    }
}
