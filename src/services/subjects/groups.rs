use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use tracing::{error, info};
use ts_rs::TS;

use super::SubjectService;
use crate::models::subjects::responses::SubjectGroupListResponse;
use crate::models::{ApiResponse, ErrorCode};

// 科目组创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectGroupRequest {
    pub name_th: String,
    pub name_en: Option<String>,
}

pub async fn list_subject_groups(
    service: &SubjectService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subject_groups().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectGroupListResponse { items },
            "Subject groups retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list subject groups: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve subject groups: {e}"),
                )),
            )
        }
    }
}

pub async fn create_subject_group(
    service: &SubjectService,
    request: &HttpRequest,
    group_data: CreateSubjectGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if group_data.name_th.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject group name must not be empty",
        )));
    }

    match storage
        .create_subject_group(group_data.name_th, group_data.name_en)
        .await
    {
        Ok(group) => {
            info!("Subject group {} created", group.name.th);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                group,
                "Subject group created successfully",
            )))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Subject group creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "Subject group already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Subject group creation failed: {msg}"),
                    )),
                )
            }
        }
    }
}
