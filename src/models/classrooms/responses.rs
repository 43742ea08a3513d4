use serde::Serialize;
use ts_rs::TS;

use super::entities::Classroom;
use crate::models::common::pagination::PaginationInfo;
use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;

// 班级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Classroom>,
}

// 班级详情响应（含班主任与在册人数）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomDetailResponse {
    pub classroom: Classroom,
    pub advisors: Vec<Teacher>,
    pub student_count: i64,
}

// 班级花名册响应（按班内序号排序）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomRosterResponse {
    pub classroom: Classroom,
    pub students: Vec<Student>,
}
