use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::requests::{ClassroomListParams, ClassroomListQuery},
};

pub async fn list_classrooms(
    service: &ClassroomService,
    request: &HttpRequest,
    query: ClassroomListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassroomListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        year: query.year,
        semester: query.semester,
    };

    match storage.list_classrooms_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve classroom list: {e}"),
            )),
        ),
    }
}
