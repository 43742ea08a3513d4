//! 新闻实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub news_type: String,
    pub title_th: String,
    pub title_en: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description_th: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body_th: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body_en: Option<String>,
    pub image_url: Option<String>,
    pub posted_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_news_article(self) -> crate::models::news::entities::NewsArticle {
        use crate::models::common::localized::LocalizedString;
        use crate::models::news::entities::{NewsArticle, NewsType};
        use chrono::{DateTime, Utc};

        let body = self.body_th.map(|th| LocalizedString::new(th, self.body_en));

        NewsArticle {
            id: self.id,
            news_type: self
                .news_type
                .parse::<NewsType>()
                .unwrap_or(NewsType::Info),
            title: LocalizedString::new(self.title_th, self.title_en),
            description: LocalizedString::new(self.description_th, self.description_en),
            body,
            image_url: self.image_url,
            posted_at: DateTime::<Utc>::from_timestamp(self.posted_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
