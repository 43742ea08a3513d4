use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if subject_data.code.th.trim().is_empty() || subject_data.name.th.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject code and name must not be empty",
        )));
    }
    if subject_data.credit <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Credit must be positive",
        )));
    }
    if subject_data.semester != 1 && subject_data.semester != 2 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Semester must be 1 or 2",
        )));
    }

    // 科目组必须存在
    match storage.list_subject_groups().await {
        Ok(groups) => {
            if !groups.iter().any(|g| g.id == subject_data.group_id) {
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

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} created", subject.code.th);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Subject creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "Subject code already exists for this year and semester",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Subject creation failed: {msg}"),
                    )),
                )
            }
        }
    }
}
