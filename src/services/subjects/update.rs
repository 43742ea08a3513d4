use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            error!("Failed to get subject {}: {}", subject_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve subject: {e}"),
                )),
            );
        }
    };

    // 教师只能更新自己任教的科目，管理员不受限
    if RequireJWT::extract_user_role(request) == Some(UserRole::Teacher) {
        let uid = RequireJWT::extract_user_id(request).unwrap_or_default();
        let teaches_subject = match storage.get_teacher_by_user_id(uid).await {
            Ok(Some(teacher)) => subject.teacher_ids.contains(&teacher.id),
            Ok(None) => false,
            Err(e) => {
                error!("Failed to resolve teacher for user {}: {}", uid, e);
                false
            }
        };
        if !teaches_subject {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "You do not teach this subject",
            )));
        }
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

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => {
            info!("Subject {} updated", subject.code.th);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(subject, "Subject updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!("Failed to update subject {}: {}", subject_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update subject: {e}"),
                )),
            )
        }
    }
}
