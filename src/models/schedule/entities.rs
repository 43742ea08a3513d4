//! 课程表业务模型
//!
//! `Schedule` 不落库：每次读取时由持久化的 `schedule_items` 记录折叠进空白
//! 网格重建（见 `grid` 模块）。这里只定义网格的数据形状。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use crate::models::classrooms::entities::ClassroomRef;
use crate::models::common::localized::LocalizedString;

// 星期，1 = 周一 … 7 = 周日
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct Day(u8);

impl Day {
    pub const MONDAY: Day = Day(1);
    pub const FRIDAY: Day = Day(5);
    pub const SUNDAY: Day = Day(7);

    /// 构造星期；超出 1-7 返回 None
    pub fn new(ordinal: u8) -> Option<Day> {
        (1..=7).contains(&ordinal).then_some(Day(ordinal))
    }

    pub fn ordinal(&self) -> u8 {
        self.0
    }

    /// 后一天（周日之后回绕到周一）
    pub fn succ(&self) -> Day {
        Day(self.0 % 7 + 1)
    }
}

impl TryFrom<u8> for Day {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Day::new(value).ok_or_else(|| format!("Day must be between 1 and 7, got {value}"))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> u8 {
        day.0
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// 科目引用（嵌入课程表格子）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct SubjectRef {
    pub id: i64,
    pub code: LocalizedString,
    pub name: LocalizedString,
}

// 一条持久化的课程表记录（已联表补全引用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleItem {
    pub id: i64,
    pub day: Day,
    pub start_time: i32,
    pub duration: i32,
    pub room: String,
    pub subject: SubjectRef,
    pub classroom: ClassroomRef,
    pub teacher_id: i64,
    // 乐观并发版本号，更新/移动时必须携带
    pub version: i64,
}

// 网格中一节课的内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct PeriodContent {
    pub item_id: i64,
    pub subject: SubjectRef,
    pub classroom: ClassroomRef,
    pub teacher_id: i64,
    pub room: String,
    pub version: i64,
}

// 网格中的一节课；content 为空表示空格子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct SchedulePeriod {
    pub start_time: i32,
    pub duration: i32,
    pub content: Vec<PeriodContent>,
}

// 一天的课程：同一行内非空节次的半开区间两两不相交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleRow {
    pub day: Day,
    pub content: Vec<SchedulePeriod>,
}

// 整张周课表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct Schedule {
    pub content: Vec<ScheduleRow>,
}

impl ScheduleItem {
    /// 该记录占据的 (日, 起始节, 节数) 区间
    pub fn span(&self) -> super::grid::PeriodSpan {
        super::grid::PeriodSpan {
            day: self.day,
            start_time: self.start_time,
            duration: self.duration,
        }
    }

    /// 转换为网格节次
    pub fn into_period(self) -> SchedulePeriod {
        SchedulePeriod {
            start_time: self.start_time,
            duration: self.duration,
            content: vec![PeriodContent {
                item_id: self.id,
                subject: self.subject,
                classroom: self.classroom,
                teacher_id: self.teacher_id,
                room: self.room,
                version: self.version,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_range() {
        assert!(Day::new(0).is_none());
        assert!(Day::new(1).is_some());
        assert!(Day::new(7).is_some());
        assert!(Day::new(8).is_none());
    }

    #[test]
    fn test_day_succ_wraps() {
        assert_eq!(Day::MONDAY.succ(), Day::new(2).unwrap());
        assert_eq!(Day::SUNDAY.succ(), Day::MONDAY);
    }

    #[test]
    fn test_day_try_from() {
        assert_eq!(Day::try_from(3).unwrap().ordinal(), 3);
        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(9).is_err());
    }
}
