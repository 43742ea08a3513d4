use serde::Deserialize;
use ts_rs::TS;

use super::entities::Day;

// 新增课程表记录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct CreateScheduleItemRequest {
    pub subject_id: i64,
    pub classroom_id: i64,
    // 教师创建时留空则使用本人；管理员创建时必填
    pub teacher_id: Option<i64>,
    pub room: String,
    pub day: Day,
    pub start_time: i32,
    pub duration: i32,
}

// 编辑课程表记录请求
//
// version 为读取时拿到的版本号；与库中不一致说明别的编辑者已改过，
// 本次编辑会被拒绝。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct UpdateScheduleItemRequest {
    pub subject_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub room: Option<String>,
    pub day: Option<Day>,
    pub start_time: Option<i32>,
    pub duration: Option<i32>,
    pub version: i64,
}

// 拖拽移动请求：一次更新完成"删除+插入"
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct MoveScheduleItemRequest {
    pub day: Day,
    pub start_time: i32,
    pub version: i64,
}

// 课程表记录筛选（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ScheduleItemFilter {
    pub teacher_id: Option<i64>,
    pub classroom_id: Option<i64>,
}
