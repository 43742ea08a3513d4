use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NewsService;
use crate::models::news::requests::CreateNewsRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_news(
    service: &NewsService,
    request: &HttpRequest,
    news_data: CreateNewsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if news_data.title.th.trim().is_empty() || news_data.description.th.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and description must not be empty",
        )));
    }

    match storage.create_news(news_data).await {
        Ok(article) => {
            info!("News article {} posted", article.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(article, "News posted successfully")))
        }
        Err(e) => {
            error!("News creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("News creation failed: {e}"),
                )),
            )
        }
    }
}
