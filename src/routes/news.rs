use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::news::requests::{CreateNewsRequest, NewsListParams, UpdateNewsRequest};
use crate::models::users::entities::UserRole;
use crate::services::NewsService;
use crate::utils::SafeNewsIdI64;

// 懒加载的全局 NEWS_SERVICE 实例
static NEWS_SERVICE: Lazy<NewsService> = Lazy::new(NewsService::new_lazy);

// HTTP处理程序
pub async fn list_news(
    req: HttpRequest,
    query: web::Query<NewsListParams>,
) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.list_news(&req, query.into_inner()).await
}

pub async fn create_news(
    req: HttpRequest,
    news_data: web::Json<CreateNewsRequest>,
) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.create_news(&req, news_data.into_inner()).await
}

pub async fn get_news(req: HttpRequest, news_id: SafeNewsIdI64) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.get_news(&req, news_id.0).await
}

pub async fn update_news(
    req: HttpRequest,
    news_id: SafeNewsIdI64,
    update_data: web::Json<UpdateNewsRequest>,
) -> ActixResult<HttpResponse> {
    NEWS_SERVICE
        .update_news(&req, news_id.0, update_data.into_inner())
        .await
}

pub async fn delete_news(req: HttpRequest, news_id: SafeNewsIdI64) -> ActixResult<HttpResponse> {
    NEWS_SERVICE.delete_news(&req, news_id.0).await
}

// 配置路由
pub fn configure_news_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/news")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_news))
                    .route(
                        web::post()
                            .to(create_news)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{news_id}")
                    .route(web::get().to(get_news))
                    .route(
                        web::put()
                            .to(update_news)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_news)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
