//! 教师名录存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{ClassAdvisors, Classrooms, SubjectGroups};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers, Model as TeacherModel};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    classrooms::entities::ClassroomRef,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let en = req.name.en;

        let model = ActiveModel {
            teacher_no: Set(req.teacher_no),
            prefix: Set(req.prefix.to_string()),
            first_name_th: Set(req.name.th.first_name),
            middle_name_th: Set(req.name.th.middle_name),
            last_name_th: Set(req.name.th.last_name),
            nickname_th: Set(req.name.th.nickname),
            first_name_en: Set(en.as_ref().map(|n| n.first_name.clone())),
            middle_name_en: Set(en.as_ref().and_then(|n| n.middle_name.clone())),
            last_name_en: Set(en.as_ref().map(|n| n.last_name.clone())),
            nickname_en: Set(en.as_ref().and_then(|n| n.nickname.clone())),
            birthdate: Set(req.birthdate),
            citizen_id: Set(req.citizen_id),
            user_id: Set(req.user_id),
            subject_group_id: Set(req.subject_group_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建教师失败: {e}")))?;

        self.hydrate_teacher(result).await
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_teacher(model).await?)),
            None => Ok(None),
        }
    }

    /// 通过关联账号获取教师
    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_teacher(model).await?)),
            None => Ok(None),
        }
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Teachers::find();

        // 科目组过滤
        if let Some(group_id) = query.subject_group_id {
            select = select.filter(Column::SubjectGroupId.eq(group_id));
        }

        // 搜索条件：工号或姓名（两种语言）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::TeacherNo.contains(&escaped))
                    .add(Column::FirstNameTh.contains(&escaped))
                    .add(Column::LastNameTh.contains(&escaped))
                    .add(Column::FirstNameEn.contains(&escaped))
                    .add(Column::LastNameEn.contains(&escaped)),
            );
        }

        // 排序：工号升序
        select = select.order_by_asc(Column::TeacherNo);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        let mut items = Vec::with_capacity(teachers.len());
        for model in teachers {
            items.push(self.hydrate_teacher(model).await?);
        }

        Ok(TeacherListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(teacher_no) = update.teacher_no {
            model.teacher_no = Set(teacher_no);
        }
        if let Some(prefix) = update.prefix {
            model.prefix = Set(prefix.to_string());
        }
        if let Some(name) = update.name {
            model.first_name_th = Set(name.th.first_name);
            model.middle_name_th = Set(name.th.middle_name);
            model.last_name_th = Set(name.th.last_name);
            model.nickname_th = Set(name.th.nickname);
            model.first_name_en = Set(name.en.as_ref().map(|n| n.first_name.clone()));
            model.middle_name_en = Set(name.en.as_ref().and_then(|n| n.middle_name.clone()));
            model.last_name_en = Set(name.en.as_ref().map(|n| n.last_name.clone()));
            model.nickname_en = Set(name.en.as_ref().and_then(|n| n.nickname.clone()));
        }
        if let Some(birthdate) = update.birthdate {
            model.birthdate = Set(birthdate);
        }
        if let Some(citizen_id) = update.citizen_id {
            model.citizen_id = Set(citizen_id);
        }
        if let Some(user_id) = update.user_id {
            model.user_id = Set(Some(user_id));
        }
        if let Some(subject_group_id) = update.subject_group_id {
            model.subject_group_id = Set(subject_group_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量检查已存在的工号
    pub async fn check_teacher_nos_exist_impl(&self, teacher_nos: &[String]) -> Result<Vec<String>> {
        if teacher_nos.is_empty() {
            return Ok(Vec::new());
        }

        let existing = Teachers::find()
            .filter(Column::TeacherNo.is_in(teacher_nos.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询工号失败: {e}")))?;

        Ok(existing.into_iter().map(|m| m.teacher_no).collect())
    }

    /// 批量检查已存在的教师身份证号
    pub async fn check_teacher_citizen_ids_exist_impl(
        &self,
        citizen_ids: &[String],
    ) -> Result<Vec<String>> {
        if citizen_ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing = Teachers::find()
            .filter(Column::CitizenId.is_in(citizen_ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询身份证号失败: {e}")))?;

        Ok(existing.into_iter().map(|m| m.citizen_id).collect())
    }

    /// 补全教师的科目组与班主任信息
    pub(crate) async fn hydrate_teacher(&self, model: TeacherModel) -> Result<Teacher> {
        let group = SubjectGroups::find_by_id(model.subject_group_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目组失败: {e}")))?
            .ok_or_else(|| {
                SchoolSystemError::database_operation(format!(
                    "教师 {} 引用了不存在的科目组 {}",
                    model.id, model.subject_group_id
                ))
            })?;

        let advisor_at = self.find_advisor_classroom(model.id).await?;

        Ok(model.into_teacher(&group, advisor_at))
    }

    /// 查找教师担任班主任的班级
    async fn find_advisor_classroom(&self, teacher_id: i64) -> Result<Option<ClassroomRef>> {
        let advisor = ClassAdvisors::find()
            .filter(crate::entity::class_advisors::Column::TeacherId.eq(teacher_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班主任失败: {e}")))?;

        let Some(advisor) = advisor else {
            return Ok(None);
        };

        let classroom = Classrooms::find_by_id(advisor.classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(classroom.map(|m| m.to_ref()))
    }

    /// 批量补全教师（班主任列表等场景）
    pub(crate) async fn hydrate_teachers(&self, models: Vec<TeacherModel>) -> Result<Vec<Teacher>> {
        let mut teachers = Vec::with_capacity(models.len());
        for model in models {
            teachers.push(self.hydrate_teacher(model).await?);
        }
        Ok(teachers)
    }
}
