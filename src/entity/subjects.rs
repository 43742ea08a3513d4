//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code_th: String,
    pub code_en: Option<String>,
    pub name_th: String,
    pub name_en: Option<String>,
    pub short_name_th: Option<String>,
    pub short_name_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_th: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    pub credit: f64,
    pub year: i32,
    pub semester: i32,
    pub group_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject_groups::Entity",
        from = "Column::GroupId",
        to = "super::subject_groups::Column::Id"
    )]
    Group,
    #[sea_orm(has_many = "super::subject_teachers::Entity")]
    SubjectTeachers,
    #[sea_orm(has_many = "super::schedule_items::Entity")]
    ScheduleItems,
}

impl Related<super::subject_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::subject_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectTeachers.def()
    }
}

impl Related<super::schedule_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_subject(
        self,
        group: crate::models::subjects::entities::SubjectGroup,
        teacher_ids: Vec<i64>,
    ) -> crate::models::subjects::entities::Subject {
        use crate::models::common::localized::LocalizedString;
        use crate::models::subjects::entities::Subject;
        use chrono::{DateTime, Utc};

        let short_name = self
            .short_name_th
            .map(|th| LocalizedString::new(th, self.short_name_en));
        let description = self
            .description_th
            .map(|th| LocalizedString::new(th, self.description_en));

        Subject {
            id: self.id,
            code: LocalizedString::new(self.code_th, self.code_en),
            name: LocalizedString::new(self.name_th, self.name_en),
            short_name,
            description,
            credit: self.credit,
            year: self.year,
            semester: self.semester,
            group,
            teacher_ids,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    pub fn to_ref(&self) -> crate::models::schedule::entities::SubjectRef {
        use crate::models::common::localized::LocalizedString;

        crate::models::schedule::entities::SubjectRef {
            id: self.id,
            code: LocalizedString::new(self.code_th.clone(), self.code_en.clone()),
            name: LocalizedString::new(self.name_th.clone(), self.name_en.clone()),
        }
    }
}
