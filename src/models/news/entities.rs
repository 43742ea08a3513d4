use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::localized::LocalizedString;

// 新闻类型
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/news.ts")]
pub enum NewsType {
    Info, // 公告
    Form, // 待填表单
}

impl std::fmt::Display for NewsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsType::Info => write!(f, "info"),
            NewsType::Form => write!(f, "form"),
        }
    }
}

impl std::str::FromStr for NewsType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(NewsType::Info),
            "form" => Ok(NewsType::Form),
            _ => Err(format!("Invalid news type: {s}")),
        }
    }
}

// 新闻/表单条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/news.ts")]
pub struct NewsArticle {
    pub id: i64,
    pub news_type: NewsType,
    pub title: LocalizedString,
    pub description: LocalizedString,
    pub body: Option<LocalizedString>,
    pub image_url: Option<String>,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
