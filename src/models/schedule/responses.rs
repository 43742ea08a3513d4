use serde::Serialize;
use ts_rs::TS;

use super::entities::{Schedule, ScheduleItem};

// 周课表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleResponse {
    pub schedule: Schedule,
}

// 单条课程表记录响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleItemResponse {
    pub item: ScheduleItem,
}
