use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NewsService;
use crate::models::news::requests::UpdateNewsRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_news(
    service: &NewsService,
    request: &HttpRequest,
    news_id: i64,
    update_data: UpdateNewsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref title) = update_data.title
        && title.th.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title must not be empty",
        )));
    }

    match storage.update_news(news_id, update_data).await {
        Ok(Some(article)) => {
            info!("News article {} updated", article.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(article, "News updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NewsNotFound,
            "News article not found",
        ))),
        Err(e) => {
            error!("Failed to update news {}: {}", news_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update news: {e}"),
                )),
            )
        }
    }
}
