//! 课程表记录实体
//!
//! version 列用于乐观并发控制：每次更新 +1，更新语句带 version 条件。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub classroom_id: i64,
    pub day: i32,
    pub start_time: i32,
    pub duration: i32,
    pub room: String,
    pub version: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id"
    )]
    Classroom,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
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
    pub fn into_schedule_item(
        self,
        subject: crate::models::schedule::entities::SubjectRef,
        classroom: crate::models::classrooms::entities::ClassroomRef,
    ) -> crate::models::schedule::entities::ScheduleItem {
        use crate::models::schedule::entities::{Day, ScheduleItem};

        ScheduleItem {
            id: self.id,
            day: Day::new(self.day.clamp(1, 7) as u8).unwrap_or(Day::MONDAY),
            start_time: self.start_time,
            duration: self.duration,
            room: self.room,
            subject,
            classroom,
            teacher_id: self.teacher_id,
            version: self.version,
        }
    }
}
