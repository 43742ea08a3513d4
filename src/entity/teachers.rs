//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub teacher_no: String,
    pub prefix: String,
    pub first_name_th: String,
    pub middle_name_th: Option<String>,
    pub last_name_th: String,
    pub nickname_th: Option<String>,
    pub first_name_en: Option<String>,
    pub middle_name_en: Option<String>,
    pub last_name_en: Option<String>,
    pub nickname_en: Option<String>,
    pub birthdate: Date,
    #[sea_orm(unique)]
    pub citizen_id: String,
    pub user_id: Option<i64>,
    pub subject_group_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::subject_groups::Entity",
        from = "Column::SubjectGroupId",
        to = "super::subject_groups::Column::Id"
    )]
    SubjectGroup,
    #[sea_orm(has_many = "super::class_advisors::Entity")]
    ClassAdvisors,
    #[sea_orm(has_many = "super::subject_teachers::Entity")]
    SubjectTeachers,
    #[sea_orm(has_many = "super::schedule_items::Entity")]
    ScheduleItems,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::subject_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectGroup.def()
    }
}

impl Related<super::class_advisors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassAdvisors.def()
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
    pub fn into_teacher(
        self,
        subject_group: &super::subject_groups::Model,
        class_advisor_at: Option<crate::models::classrooms::entities::ClassroomRef>,
    ) -> crate::models::teachers::entities::Teacher {
        use crate::models::common::localized::{LocalizedName, LocalizedString, PersonName};
        use crate::models::students::entities::NamePrefix;
        use crate::models::teachers::entities::{SubjectGroupRef, Teacher};
        use chrono::{DateTime, Utc};

        let en = match (self.first_name_en, self.last_name_en) {
            (Some(first_name), Some(last_name)) => Some(PersonName {
                first_name,
                middle_name: self.middle_name_en,
                last_name,
                nickname: self.nickname_en,
            }),
            _ => None,
        };

        Teacher {
            id: self.id,
            teacher_no: self.teacher_no,
            prefix: self.prefix.parse::<NamePrefix>().unwrap_or(NamePrefix::Mr),
            name: LocalizedName {
                th: PersonName {
                    first_name: self.first_name_th,
                    middle_name: self.middle_name_th,
                    last_name: self.last_name_th,
                    nickname: self.nickname_th,
                },
                en,
            },
            birthdate: self.birthdate,
            citizen_id: self.citizen_id,
            user_id: self.user_id,
            subject_group: SubjectGroupRef {
                id: subject_group.id,
                name: LocalizedString::new(
                    subject_group.name_th.clone(),
                    subject_group.name_en.clone(),
                ),
            },
            class_advisor_at,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
