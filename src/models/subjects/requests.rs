use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::localized::LocalizedString;
use crate::models::common::pagination::PaginationQuery;

// 科目查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub group_id: Option<i64>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub search: Option<String>,
}

// 科目创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub code: LocalizedString,
    pub name: LocalizedString,
    pub short_name: Option<LocalizedString>,
    pub description: Option<LocalizedString>,
    pub credit: f64,
    pub year: i32,
    pub semester: i32,
    pub group_id: i64,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
}

// 科目更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub code: Option<LocalizedString>,
    pub name: Option<LocalizedString>,
    pub short_name: Option<LocalizedString>,
    pub description: Option<LocalizedString>,
    pub credit: Option<f64>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub group_id: Option<i64>,
    // 提供时整体替换任课教师列表
    pub teacher_ids: Option<Vec<i64>>,
}

// 科目列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub group_id: Option<i64>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}
