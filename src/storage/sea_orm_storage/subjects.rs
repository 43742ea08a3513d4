//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::SubjectGroups;
use crate::entity::subject_groups::ActiveModel as SubjectGroupActiveModel;
use crate::entity::subject_teachers::{
    ActiveModel as SubjectTeacherActiveModel, Column as SubjectTeacherColumn,
    Entity as SubjectTeachers,
};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects, Model as SubjectModel};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::{Subject, SubjectGroup},
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建科目并登记任课教师
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code_th: Set(req.code.th),
            code_en: Set(req.code.en),
            name_th: Set(req.name.th),
            name_en: Set(req.name.en),
            short_name_th: Set(req.short_name.as_ref().map(|s| s.th.clone())),
            short_name_en: Set(req.short_name.as_ref().and_then(|s| s.en.clone())),
            description_th: Set(req.description.as_ref().map(|s| s.th.clone())),
            description_en: Set(req.description.as_ref().and_then(|s| s.en.clone())),
            credit: Set(req.credit),
            year: Set(req.year),
            semester: Set(req.semester),
            group_id: Set(req.group_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建科目失败: {e}")))?;

        self.replace_subject_teachers(result.id, &req.teacher_ids)
            .await?;

        self.hydrate_subject(result).await
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_subject(model).await?)),
            None => Ok(None),
        }
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Subjects::find();

        // 科目组/学年/学期过滤
        if let Some(group_id) = query.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }
        if let Some(year) = query.year {
            select = select.filter(Column::Year.eq(year));
        }
        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        // 任课教师过滤
        if let Some(teacher_id) = query.teacher_id {
            let subject_ids: Vec<i64> = SubjectTeachers::find()
                .filter(SubjectTeacherColumn::TeacherId.eq(teacher_id))
                .select_only()
                .column(SubjectTeacherColumn::SubjectId)
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询任课科目失败: {e}"))
                })?;
            select = select.filter(Column::Id.is_in(subject_ids));
        }

        // 搜索条件：代码或名称（两种语言）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::CodeTh.contains(&escaped))
                    .add(Column::CodeEn.contains(&escaped))
                    .add(Column::NameTh.contains(&escaped))
                    .add(Column::NameEn.contains(&escaped)),
            );
        }

        // 排序：代码升序
        select = select.order_by_asc(Column::CodeTh);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目页数失败: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目列表失败: {e}")))?;

        let mut items = Vec::with_capacity(subjects.len());
        for model in subjects {
            items.push(self.hydrate_subject(model).await?);
        }

        Ok(SubjectListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(subject_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code_th = Set(code.th);
            model.code_en = Set(code.en);
        }
        if let Some(name) = update.name {
            model.name_th = Set(name.th);
            model.name_en = Set(name.en);
        }
        if let Some(short_name) = update.short_name {
            model.short_name_th = Set(Some(short_name.th));
            model.short_name_en = Set(short_name.en);
        }
        if let Some(description) = update.description {
            model.description_th = Set(Some(description.th));
            model.description_en = Set(description.en);
        }
        if let Some(credit) = update.credit {
            model.credit = Set(credit);
        }
        if let Some(year) = update.year {
            model.year = Set(year);
        }
        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }
        if let Some(group_id) = update.group_id {
            model.group_id = Set(group_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新科目失败: {e}")))?;

        // 提供任课教师列表时整体替换
        if let Some(teacher_ids) = update.teacher_ids {
            self.replace_subject_teachers(subject_id, &teacher_ids)
                .await?;
        }

        self.get_subject_by_id_impl(subject_id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 科目组列表
    pub async fn list_subject_groups_impl(&self) -> Result<Vec<SubjectGroup>> {
        let groups = SubjectGroups::find()
            .order_by_asc(crate::entity::subject_groups::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目组失败: {e}")))?;

        Ok(groups.into_iter().map(|m| m.into_subject_group()).collect())
    }

    /// 创建科目组
    pub async fn create_subject_group_impl(
        &self,
        name_th: String,
        name_en: Option<String>,
    ) -> Result<SubjectGroup> {
        let model = SubjectGroupActiveModel {
            name_th: Set(name_th),
            name_en: Set(name_en),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建科目组失败: {e}")))?;

        Ok(result.into_subject_group())
    }

    /// 补全科目的科目组与任课教师
    async fn hydrate_subject(&self, model: SubjectModel) -> Result<Subject> {
        let group = SubjectGroups::find_by_id(model.group_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目组失败: {e}")))?
            .ok_or_else(|| {
                SchoolSystemError::database_operation(format!(
                    "科目 {} 引用了不存在的科目组 {}",
                    model.id, model.group_id
                ))
            })?;

        let teacher_ids: Vec<i64> = SubjectTeachers::find()
            .filter(SubjectTeacherColumn::SubjectId.eq(model.id))
            .select_only()
            .column(SubjectTeacherColumn::TeacherId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询任课教师失败: {e}")))?;

        Ok(model.into_subject(group.into_subject_group(), teacher_ids))
    }

    /// 整体替换科目的任课教师登记
    async fn replace_subject_teachers(&self, subject_id: i64, teacher_ids: &[i64]) -> Result<()> {
        SubjectTeachers::delete_many()
            .filter(SubjectTeacherColumn::SubjectId.eq(subject_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("清除任课教师失败: {e}")))?;

        for teacher_id in teacher_ids {
            let model = SubjectTeacherActiveModel {
                subject_id: Set(subject_id),
                teacher_id: Set(*teacher_id),
                ..Default::default()
            };
            model.insert(&self.db).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("登记任课教师失败: {e}"))
            })?;
        }

        Ok(())
    }
}
