pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::news::requests::{CreateNewsRequest, NewsListParams, UpdateNewsRequest};
use crate::storage::Storage;

pub struct NewsService {
    storage: Option<Arc<dyn Storage>>,
}

impl NewsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取新闻列表
    pub async fn list_news(
        &self,
        request: &HttpRequest,
        query: NewsListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_news(self, request, query).await
    }

    // 发布新闻
    pub async fn create_news(
        &self,
        request: &HttpRequest,
        news_data: CreateNewsRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_news(self, request, news_data).await
    }

    // 根据 ID 获取新闻
    pub async fn get_news(&self, request: &HttpRequest, news_id: i64) -> ActixResult<HttpResponse> {
        get::get_news(self, request, news_id).await
    }

    // 更新新闻
    pub async fn update_news(
        &self,
        request: &HttpRequest,
        news_id: i64,
        update_data: UpdateNewsRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_news(self, request, news_id, update_data).await
    }

    // 删除新闻
    pub async fn delete_news(
        &self,
        request: &HttpRequest,
        news_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_news(self, request, news_id).await
    }
}
