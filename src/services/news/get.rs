use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NewsService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_news(
    service: &NewsService,
    request: &HttpRequest,
    news_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_news_by_id(news_id).await {
        Ok(Some(article)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(article, "News retrieved successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NewsNotFound,
            "News article not found",
        ))),
        Err(e) => {
            error!("Failed to get news {}: {}", news_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve news: {e}"),
                )),
            )
        }
    }
}
