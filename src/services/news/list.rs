use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NewsService;
use crate::models::{
    ApiResponse, ErrorCode,
    news::requests::{NewsListParams, NewsListQuery},
};

pub async fn list_news(
    service: &NewsService,
    request: &HttpRequest,
    query: NewsListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = NewsListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        news_type: query.news_type,
    };

    match storage.list_news_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "News list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve news list: {e}"),
            )),
        ),
    }
}
