use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级引用（嵌入学生、教师与课程表格子）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomRef {
    pub id: i64,
    pub number: i32,
}

// 班级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    pub id: i64,
    // 3 位班号，如 405 表示四年级 5 班
    pub number: i32,
    // 学年（佛历）
    pub year: i32,
    // 学期：1 或 2
    pub semester: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
