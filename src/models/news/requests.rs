use serde::Deserialize;
use ts_rs::TS;

use super::entities::NewsType;
use crate::models::common::localized::LocalizedString;
use crate::models::common::pagination::PaginationQuery;

// 新闻查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/news.ts")]
pub struct NewsListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "type")]
    pub news_type: Option<NewsType>,
}

// 新闻创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/news.ts")]
pub struct CreateNewsRequest {
    pub news_type: NewsType,
    pub title: LocalizedString,
    pub description: LocalizedString,
    pub body: Option<LocalizedString>,
    pub image_url: Option<String>,
}

// 新闻更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/news.ts")]
pub struct UpdateNewsRequest {
    pub news_type: Option<NewsType>,
    pub title: Option<LocalizedString>,
    pub description: Option<LocalizedString>,
    pub body: Option<LocalizedString>,
    pub image_url: Option<String>,
}

// 新闻列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct NewsListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub news_type: Option<NewsType>,
}
