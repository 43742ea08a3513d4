use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NewsService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_news(
    service: &NewsService,
    request: &HttpRequest,
    news_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_news(news_id).await {
        Ok(true) => {
            info!("News article {} deleted", news_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("News deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NewsNotFound,
            "News article not found",
        ))),
        Err(e) => {
            error!("Failed to delete news {}: {}", news_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete news: {e}"),
                )),
            )
        }
    }
}
