use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::localized::{LocalizedName, LocalizedString};
use crate::models::classrooms::entities::ClassroomRef;
use crate::models::students::entities::NamePrefix;

// 科目组引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct SubjectGroupRef {
    pub id: i64,
    pub name: LocalizedString,
}

// 教师名录条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct Teacher {
    pub id: i64,
    // 教师工号
    pub teacher_no: String,
    pub prefix: NamePrefix,
    pub name: LocalizedName,
    pub birthdate: chrono::NaiveDate,
    pub citizen_id: String,
    pub user_id: Option<i64>,
    // 所属科目组
    pub subject_group: SubjectGroupRef,
    // 担任班主任的班级（可选）
    pub class_advisor_at: Option<ClassroomRef>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
