use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub year: Option<i32>,
    pub semester: Option<i32>,
}

// 班级创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct CreateClassroomRequest {
    pub number: i32,
    pub year: i32,
    pub semester: i32,
    // 班主任教师 ID 列表
    #[serde(default)]
    pub advisor_ids: Vec<i64>,
}

// 班级更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct UpdateClassroomRequest {
    pub number: Option<i32>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    // 提供时整体替换班主任列表
    pub advisor_ids: Option<Vec<i64>>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassroomListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
}
