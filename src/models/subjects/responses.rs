use serde::Serialize;
use ts_rs::TS;

use super::entities::{Subject, SubjectGroup};
use crate::models::common::pagination::PaginationInfo;

// 科目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Subject>,
}

// 科目组列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectGroupListResponse {
    pub items: Vec<SubjectGroup>,
}
