//! 课程表记录存储操作
//!
//! 更新与移动走 CAS：UPDATE ... WHERE id = ? AND version = ?。
//! 命中 0 行且记录仍存在即判定版本冲突，交由服务层返回 409。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{Classrooms, Subjects};
use crate::entity::schedule_items::{
    ActiveModel, Column, Entity as ScheduleItems, Model as ScheduleItemModel,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::schedule::{
    entities::{ClassroomRef, Day, ScheduleItem, SubjectRef},
    requests::{CreateScheduleItemRequest, ScheduleItemFilter, UpdateScheduleItemRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 按过滤条件列出课程表记录
    ///
    /// 返回顺序为插入顺序（主键升序）；网格折叠的 last-one-wins 语义依赖
    /// 这一顺序。
    pub async fn list_schedule_items_impl(
        &self,
        filter: ScheduleItemFilter,
    ) -> Result<Vec<ScheduleItem>> {
        let mut select = ScheduleItems::find();

        if let Some(teacher_id) = filter.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(classroom_id) = filter.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }

        let models = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程表失败: {e}")))?;

        self.hydrate_schedule_items(models).await
    }

    /// 通过 ID 获取课程表记录
    pub async fn get_schedule_item_by_id_impl(&self, item_id: i64) -> Result<Option<ScheduleItem>> {
        let result = ScheduleItems::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程表失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_schedule_item(model).await?)),
            None => Ok(None),
        }
    }

    /// 创建课程表记录
    pub async fn create_schedule_item_impl(
        &self,
        teacher_id: i64,
        req: CreateScheduleItemRequest,
    ) -> Result<ScheduleItem> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            teacher_id: Set(teacher_id),
            classroom_id: Set(req.classroom_id),
            day: Set(i32::from(req.day.ordinal())),
            start_time: Set(req.start_time),
            duration: Set(req.duration),
            room: Set(req.room),
            version: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建课程表记录失败: {e}")))?;

        self.hydrate_schedule_item(result).await
    }

    /// 更新课程表记录（版本保护）
    pub async fn update_schedule_item_impl(
        &self,
        item_id: i64,
        update: UpdateScheduleItemRequest,
    ) -> Result<Option<ScheduleItem>> {
        let existing = ScheduleItems::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程表失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            version: Set(existing.version + 1),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(classroom_id) = update.classroom_id {
            model.classroom_id = Set(classroom_id);
        }
        if let Some(room) = update.room {
            model.room = Set(room);
        }
        if let Some(day) = update.day {
            model.day = Set(i32::from(day.ordinal()));
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(duration) = update.duration {
            model.duration = Set(duration);
        }

        self.apply_versioned_update(item_id, update.version, model)
            .await?;

        self.get_schedule_item_by_id_impl(item_id).await
    }

    /// 移动课程表记录：一次更新写入新的 (day, start_time)
    pub async fn move_schedule_item_impl(
        &self,
        item_id: i64,
        day: Day,
        start_time: i32,
        expected_version: i64,
    ) -> Result<Option<ScheduleItem>> {
        let existing = ScheduleItems::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程表失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            day: Set(i32::from(day.ordinal())),
            start_time: Set(start_time),
            version: Set(expected_version + 1),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        self.apply_versioned_update(item_id, expected_version, model)
            .await?;

        self.get_schedule_item_by_id_impl(item_id).await
    }

    /// 删除课程表记录
    pub async fn delete_schedule_item_impl(&self, item_id: i64) -> Result<bool> {
        let result = ScheduleItems::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除课程表记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 带版本条件的更新；未命中任何行即视为并发冲突
    async fn apply_versioned_update(
        &self,
        item_id: i64,
        expected_version: i64,
        model: ActiveModel,
    ) -> Result<()> {
        let result = ScheduleItems::update_many()
            .set(model)
            .filter(Column::Id.eq(item_id))
            .filter(Column::Version.eq(expected_version))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新课程表记录失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(SchoolSystemError::version_conflict(format!(
                "课程表记录 {item_id} 的版本 {expected_version} 已过期"
            )));
        }

        Ok(())
    }

    /// 补全单条记录的科目与班级引用
    async fn hydrate_schedule_item(&self, model: ScheduleItemModel) -> Result<ScheduleItem> {
        let subject = Subjects::find_by_id(model.subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?
            .ok_or_else(|| {
                SchoolSystemError::database_operation(format!(
                    "课程表记录 {} 引用了不存在的科目 {}",
                    model.id, model.subject_id
                ))
            })?;

        let classroom = Classrooms::find_by_id(model.classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                SchoolSystemError::database_operation(format!(
                    "课程表记录 {} 引用了不存在的班级 {}",
                    model.id, model.classroom_id
                ))
            })?;

        Ok(model.into_schedule_item(subject.to_ref(), classroom.to_ref()))
    }

    /// 批量补全记录引用（一次读取所有科目与班级）
    async fn hydrate_schedule_items(
        &self,
        models: Vec<ScheduleItemModel>,
    ) -> Result<Vec<ScheduleItem>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let subject_ids: Vec<i64> = models.iter().map(|m| m.subject_id).collect();
        let classroom_ids: Vec<i64> = models.iter().map(|m| m.classroom_id).collect();

        let subjects: HashMap<i64, SubjectRef> = Subjects::find()
            .filter(crate::entity::subjects::Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.to_ref()))
            .collect();

        let classrooms: HashMap<i64, ClassroomRef> = Classrooms::find()
            .filter(crate::entity::classrooms::Column::Id.is_in(classroom_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.to_ref()))
            .collect();

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            let subject = subjects.get(&model.subject_id).cloned().ok_or_else(|| {
                SchoolSystemError::database_operation(format!(
                    "课程表记录 {} 引用了不存在的科目 {}",
                    model.id, model.subject_id
                ))
            })?;
            let classroom = classrooms.get(&model.classroom_id).cloned().ok_or_else(|| {
                SchoolSystemError::database_operation(format!(
                    "课程表记录 {} 引用了不存在的班级 {}",
                    model.id, model.classroom_id
                ))
            })?;
            items.push(model.into_schedule_item(subject, classroom));
        }

        Ok(items)
    }
}
