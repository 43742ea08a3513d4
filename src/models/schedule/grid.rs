//! 周课表网格算法
//!
//! 纯函数，无 I/O：
//! - `are_periods_overlapping` 判断两节课是否冲突
//! - `empty_schedule` 构造空白网格
//! - `populate_schedule` 把持久化记录折叠进网格
//! - `validate_placement` 校验一次新增/编辑/移动的落点
//!
//! 节次区间一律按半开区间 `[start, start + duration)` 处理，首尾相接不算冲突。

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use super::entities::{Day, Schedule, ScheduleItem, ScheduleRow};

/// 每天的固定节数
pub const PERIODS_PER_DAY: i32 = 10;

/// 教室编号：恰好 4 位数字
static ROOM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("Invalid room regex"));

// 一节课占据的时间区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    pub day: Day,
    pub start_time: i32,
    pub duration: i32,
}

// 待校验的落点（新增/编辑/移动共用）
#[derive(Debug, Clone)]
pub struct PlacementCandidate {
    pub subject_id: i64,
    pub classroom_id: i64,
    pub room: String,
    pub day: Day,
    pub start_time: i32,
    pub duration: i32,
}

impl PlacementCandidate {
    pub fn span(&self) -> PeriodSpan {
        PeriodSpan {
            day: self.day,
            start_time: self.start_time,
            duration: self.duration,
        }
    }
}

// 编辑模式下要跳过的原节次（按 日 + 原起始节 定位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLocator {
    pub day: Day,
    pub start_time: i32,
}

/// 判断两节课是否时间冲突
///
/// 不同天直接不冲突；同一天按半开区间求交。
pub fn are_periods_overlapping(a: &PeriodSpan, b: &PeriodSpan) -> bool {
    if a.day != b.day {
        return false;
    }
    a.start_time < b.start_time + b.duration && b.start_time < a.start_time + a.duration
}

/// 构造从 `start_day` 起连续 `number_of_days` 天的空白课表
pub fn empty_schedule(start_day: Day, number_of_days: u8) -> Schedule {
    let mut day = start_day;
    let mut content = Vec::with_capacity(number_of_days as usize);
    for _ in 0..number_of_days {
        content.push(ScheduleRow {
            day,
            content: Vec::new(),
        });
        day = day.succ();
    }
    Schedule { content }
}

/// 把持久化记录按输入顺序折叠进网格
///
/// 每放入一条记录，先移除同一天内与之冲突的已有节次，再把它追加到该天
/// 行尾。因此输入列表靠后的记录在冲突时获胜（last-one-wins，既定策略）。
/// 记录的 day 在网格中没有对应行时丢弃该记录并记一条警告。
pub fn populate_schedule(mut schedule: Schedule, items: Vec<ScheduleItem>) -> Schedule {
    for item in items {
        let span = item.span();

        let Some(row) = schedule.content.iter_mut().find(|row| row.day == item.day) else {
            warn!(
                "Schedule item {} dropped: day {} has no row in the grid",
                item.id, item.day
            );
            continue;
        };

        // 先清掉与新记录冲突的已有节次
        row.content.retain(|period| {
            !are_periods_overlapping(
                &PeriodSpan {
                    day: item.day,
                    start_time: period.start_time,
                    duration: period.duration,
                },
                &span,
            )
        });

        row.content.push(item.into_period());
    }

    schedule
}

/// 校验落点：字段检查 + 冲突检查
///
/// 字段检查：科目/班级引用已选、教室号匹配 4 位数字、起始节与节数在
/// `1..=PERIODS_PER_DAY` 内且整节课不越出当天。
/// 冲突检查：展平网格为 (日, 起始节, 节数) 序列，跳过空格子；编辑模式下
/// 跳过 `excluding` 定位的原节次（允许原地保存）；任一剩余节次与候选冲突
/// 即拒绝。
///
/// 返回值仅是布尔门：写入路径仍以数据库为准。
pub fn validate_placement(
    candidate: &PlacementCandidate,
    schedule: &Schedule,
    excluding: Option<PeriodLocator>,
) -> bool {
    // 元数据检查
    if candidate.subject_id <= 0 {
        return false;
    }
    if candidate.classroom_id <= 0 {
        return false;
    }
    if !ROOM_RE.is_match(&candidate.room) {
        return false;
    }

    // 位置检查
    if schedule.content.iter().all(|row| row.day != candidate.day) {
        return false;
    }
    if candidate.start_time < 1 || candidate.start_time > PERIODS_PER_DAY {
        return false;
    }
    if candidate.duration < 1 || candidate.duration > PERIODS_PER_DAY {
        return false;
    }
    if candidate.start_time + candidate.duration - 1 > PERIODS_PER_DAY {
        return false;
    }

    let candidate_span = candidate.span();

    // 冲突检查
    for row in &schedule.content {
        for period in &row.content {
            // 空格子不参与冲突
            if period.content.is_empty() {
                continue;
            }

            // 编辑模式下跳过正在编辑的节次
            if let Some(excluded) = excluding
                && row.day == excluded.day
                && period.start_time == excluded.start_time
            {
                continue;
            }

            let span = PeriodSpan {
                day: row.day,
                start_time: period.start_time,
                duration: period.duration,
            };
            if are_periods_overlapping(&span, &candidate_span) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classrooms::entities::ClassroomRef;
    use crate::models::common::localized::LocalizedString;
    use crate::models::schedule::entities::SubjectRef;

    fn day(ordinal: u8) -> Day {
        Day::new(ordinal).unwrap()
    }

    fn span(d: u8, start: i32, duration: i32) -> PeriodSpan {
        PeriodSpan {
            day: day(d),
            start_time: start,
            duration,
        }
    }

    fn item(id: i64, d: u8, start: i32, duration: i32) -> ScheduleItem {
        ScheduleItem {
            id,
            day: day(d),
            start_time: start,
            duration,
            room: "1404".to_string(),
            subject: SubjectRef {
                id: 1,
                code: LocalizedString::new("ว21101", Some("SC21101".to_string())),
                name: LocalizedString::new("วิทยาศาสตร์", Some("Science".to_string())),
            },
            classroom: ClassroomRef { id: 1, number: 405 },
            teacher_id: 9,
            version: 1,
        }
    }

    fn candidate(d: u8, start: i32, duration: i32) -> PlacementCandidate {
        PlacementCandidate {
            subject_id: 1,
            classroom_id: 1,
            room: "1404".to_string(),
            day: day(d),
            start_time: start,
            duration,
        }
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (span(1, 1, 2), span(1, 2, 2)),
            (span(1, 1, 1), span(1, 5, 1)),
            (span(2, 3, 4), span(2, 4, 1)),
            (span(1, 1, 2), span(3, 1, 2)),
        ];
        for (a, b) in cases {
            assert_eq!(
                are_periods_overlapping(&a, &b),
                are_periods_overlapping(&b, &a)
            );
        }
    }

    #[test]
    fn test_different_days_never_overlap() {
        assert!(!are_periods_overlapping(&span(1, 1, 10), &span(2, 1, 10)));
        assert!(!are_periods_overlapping(&span(3, 5, 2), &span(4, 5, 2)));
    }

    #[test]
    fn test_abutting_periods_do_not_overlap() {
        // [1,3) 与 [3,4) 首尾相接
        assert!(!are_periods_overlapping(&span(1, 1, 2), &span(1, 3, 1)));
        assert!(!are_periods_overlapping(&span(1, 3, 1), &span(1, 1, 2)));
    }

    #[test]
    fn test_contained_period_overlaps() {
        assert!(are_periods_overlapping(&span(1, 2, 4), &span(1, 3, 1)));
    }

    #[test]
    fn test_empty_schedule_shape() {
        let schedule = empty_schedule(Day::MONDAY, 5);
        assert_eq!(schedule.content.len(), 5);
        for (i, row) in schedule.content.iter().enumerate() {
            assert_eq!(row.day.ordinal() as usize, i + 1);
            assert!(row.content.is_empty());
        }
    }

    #[test]
    fn test_empty_schedule_wraps_past_sunday() {
        let schedule = empty_schedule(day(6), 3);
        let days: Vec<u8> = schedule.content.iter().map(|r| r.day.ordinal()).collect();
        assert_eq!(days, vec![6, 7, 1]);
    }

    #[test]
    fn test_populate_last_one_wins() {
        let schedule = populate_schedule(
            empty_schedule(Day::MONDAY, 5),
            vec![item(1, 1, 1, 2), item(2, 1, 2, 1)],
        );
        let monday = &schedule.content[0];
        assert_eq!(monday.content.len(), 1);
        assert_eq!(monday.content[0].content[0].item_id, 2);
    }

    #[test]
    fn test_populate_is_order_dependent() {
        let schedule = populate_schedule(
            empty_schedule(Day::MONDAY, 5),
            vec![item(2, 1, 2, 1), item(1, 1, 1, 2)],
        );
        let monday = &schedule.content[0];
        assert_eq!(monday.content.len(), 1);
        assert_eq!(monday.content[0].content[0].item_id, 1);
    }

    #[test]
    fn test_populate_keeps_disjoint_periods() {
        let schedule = populate_schedule(
            empty_schedule(Day::MONDAY, 5),
            vec![item(1, 1, 1, 2), item(2, 1, 3, 2), item(3, 2, 1, 2)],
        );
        assert_eq!(schedule.content[0].content.len(), 2);
        assert_eq!(schedule.content[1].content.len(), 1);
    }

    #[test]
    fn test_populate_drops_unmatched_day() {
        // 网格只有周一到周五，周六的记录被丢弃
        let schedule = populate_schedule(empty_schedule(Day::MONDAY, 5), vec![item(1, 6, 1, 1)]);
        assert!(schedule.content.iter().all(|row| row.content.is_empty()));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let schedule = empty_schedule(Day::MONDAY, 5);
        assert!(!validate_placement(&candidate(1, 1, 0), &schedule, None));
    }

    #[test]
    fn test_validate_rejects_overflowing_day() {
        let schedule = empty_schedule(Day::MONDAY, 5);
        // 第 9 节开始连上 3 节会越出第 10 节
        assert!(!validate_placement(&candidate(1, 9, 3), &schedule, None));
        assert!(validate_placement(&candidate(1, 9, 2), &schedule, None));
    }

    #[test]
    fn test_validate_rejects_bad_room() {
        let schedule = empty_schedule(Day::MONDAY, 5);
        for room in ["1", "12345", "14a4", ""] {
            let mut c = candidate(1, 1, 1);
            c.room = room.to_string();
            assert!(!validate_placement(&c, &schedule, None), "room {room:?}");
        }
    }

    #[test]
    fn test_validate_rejects_missing_refs() {
        let schedule = empty_schedule(Day::MONDAY, 5);
        let mut c = candidate(1, 1, 1);
        c.subject_id = 0;
        assert!(!validate_placement(&c, &schedule, None));
        let mut c = candidate(1, 1, 1);
        c.classroom_id = 0;
        assert!(!validate_placement(&c, &schedule, None));
    }

    #[test]
    fn test_validate_rejects_day_outside_grid() {
        let schedule = empty_schedule(Day::MONDAY, 5);
        assert!(!validate_placement(&candidate(6, 1, 1), &schedule, None));
    }

    #[test]
    fn test_validate_conflict_detection() {
        // 周一第 3-4 节已占用
        let schedule = populate_schedule(empty_schedule(Day::MONDAY, 5), vec![item(1, 1, 3, 2)]);
        // 第 4 节落点与之冲突
        assert!(!validate_placement(&candidate(1, 4, 1), &schedule, None));
        // 第 5 节紧随其后，不冲突
        assert!(validate_placement(&candidate(1, 5, 1), &schedule, None));
    }

    #[test]
    fn test_validate_edit_mode_allows_noop() {
        let schedule = populate_schedule(empty_schedule(Day::MONDAY, 5), vec![item(1, 1, 3, 2)]);
        let unchanged = candidate(1, 3, 2);
        // 不排除自身时，与自己冲突
        assert!(!validate_placement(&unchanged, &schedule, None));
        // 编辑模式下排除自身，原地保存通过
        let locator = PeriodLocator {
            day: day(1),
            start_time: 3,
        };
        assert!(validate_placement(&unchanged, &schedule, Some(locator)));
    }

    #[test]
    fn test_validate_edit_mode_still_checks_others() {
        let schedule = populate_schedule(
            empty_schedule(Day::MONDAY, 5),
            vec![item(1, 1, 3, 2), item(2, 1, 6, 1)],
        );
        let locator = PeriodLocator {
            day: day(1),
            start_time: 3,
        };
        // 把第 3 节的课移到第 6 节，与另一节课冲突
        let moved = candidate(1, 6, 1);
        assert!(!validate_placement(&moved, &schedule, Some(locator)));
    }
}
