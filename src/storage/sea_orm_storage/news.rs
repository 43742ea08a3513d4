//! 新闻存储操作

use super::SeaOrmStorage;
use crate::entity::news::{ActiveModel, Column, Entity as News};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    news::{
        entities::NewsArticle,
        requests::{CreateNewsRequest, NewsListQuery, UpdateNewsRequest},
        responses::NewsListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建新闻
    pub async fn create_news_impl(&self, req: CreateNewsRequest) -> Result<NewsArticle> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            news_type: Set(req.news_type.to_string()),
            title_th: Set(req.title.th),
            title_en: Set(req.title.en),
            description_th: Set(req.description.th),
            description_en: Set(req.description.en),
            body_th: Set(req.body.as_ref().map(|b| b.th.clone())),
            body_en: Set(req.body.as_ref().and_then(|b| b.en.clone())),
            image_url: Set(req.image_url),
            posted_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建新闻失败: {e}")))?;

        Ok(result.into_news_article())
    }

    /// 通过 ID 获取新闻
    pub async fn get_news_by_id_impl(&self, news_id: i64) -> Result<Option<NewsArticle>> {
        let result = News::find_by_id(news_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询新闻失败: {e}")))?;

        Ok(result.map(|m| m.into_news_article()))
    }

    /// 分页列出新闻（按发布时间倒序）
    pub async fn list_news_with_pagination_impl(
        &self,
        query: NewsListQuery,
    ) -> Result<NewsListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = News::find();

        // 类型过滤
        if let Some(news_type) = query.news_type {
            select = select.filter(Column::NewsType.eq(news_type.to_string()));
        }

        select = select.order_by_desc(Column::PostedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询新闻总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询新闻页数失败: {e}")))?;

        let news = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询新闻列表失败: {e}")))?;

        Ok(NewsListResponse {
            items: news.into_iter().map(|m| m.into_news_article()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新新闻
    pub async fn update_news_impl(
        &self,
        news_id: i64,
        update: UpdateNewsRequest,
    ) -> Result<Option<NewsArticle>> {
        let existing = self.get_news_by_id_impl(news_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(news_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(news_type) = update.news_type {
            model.news_type = Set(news_type.to_string());
        }
        if let Some(title) = update.title {
            model.title_th = Set(title.th);
            model.title_en = Set(title.en);
        }
        if let Some(description) = update.description {
            model.description_th = Set(description.th);
            model.description_en = Set(description.en);
        }
        if let Some(body) = update.body {
            model.body_th = Set(Some(body.th));
            model.body_en = Set(body.en);
        }
        if let Some(image_url) = update.image_url {
            model.image_url = Set(Some(image_url));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新新闻失败: {e}")))?;

        self.get_news_by_id_impl(news_id).await
    }

    /// 删除新闻
    pub async fn delete_news_impl(&self, news_id: i64) -> Result<bool> {
        let result = News::delete_by_id(news_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除新闻失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
