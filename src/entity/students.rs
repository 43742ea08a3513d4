//! 学生实体
//!
//! 双语姓名拆成独立列存储，泰语列必填、英语列可空。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub student_no: String,
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
    pub classroom_id: Option<i64>,
    pub class_no: Option<i32>,
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
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id"
    )]
    Classroom,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(
        self,
        classroom: Option<crate::models::classrooms::entities::ClassroomRef>,
    ) -> crate::models::students::entities::Student {
        use crate::models::common::localized::{LocalizedName, PersonName};
        use crate::models::students::entities::{NamePrefix, Student};
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

        Student {
            id: self.id,
            student_no: self.student_no,
            prefix: self
                .prefix
                .parse::<NamePrefix>()
                .unwrap_or(NamePrefix::Master),
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
            classroom,
            class_no: self.class_no,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
