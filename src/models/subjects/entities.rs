use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::localized::LocalizedString;

// 科目组（如 科学、外语）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectGroup {
    pub id: i64,
    pub name: LocalizedString,
}

// 科目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub code: LocalizedString,
    pub name: LocalizedString,
    pub short_name: Option<LocalizedString>,
    pub description: Option<LocalizedString>,
    // 学分
    pub credit: f64,
    // 开课学年与学期
    pub year: i32,
    pub semester: i32,
    pub group: SubjectGroup,
    // 任课教师 ID 列表
    pub teacher_ids: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
