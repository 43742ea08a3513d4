use super::entities::NewsArticle;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 新闻列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/news.ts")]
pub struct NewsListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<NewsArticle>,
}
