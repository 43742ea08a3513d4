//! 学生名录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::Classrooms;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    classrooms::entities::ClassroomRef,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let en = req.name.en;

        let model = ActiveModel {
            student_no: Set(req.student_no),
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
            classroom_id: Set(req.classroom_id),
            class_no: Set(req.class_no),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建学生失败: {e}")))?;

        let classroom = self.load_classroom_ref(result.classroom_id).await?;
        Ok(result.into_student(classroom))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => {
                let classroom = self.load_classroom_ref(model.classroom_id).await?;
                Ok(Some(model.into_student(classroom)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 班级过滤
        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }

        // 搜索条件：学号或姓名（两种语言）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::StudentNo.contains(&escaped))
                    .add(Column::FirstNameTh.contains(&escaped))
                    .add(Column::LastNameTh.contains(&escaped))
                    .add(Column::FirstNameEn.contains(&escaped))
                    .add(Column::LastNameEn.contains(&escaped)),
            );
        }

        // 排序：学号升序
        select = select.order_by_asc(Column::StudentNo);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        let classroom_refs = self
            .load_classroom_refs(students.iter().filter_map(|m| m.classroom_id))
            .await?;

        Ok(StudentListResponse {
            items: students
                .into_iter()
                .map(|m| {
                    let classroom = m.classroom_id.and_then(|id| classroom_refs.get(&id).cloned());
                    m.into_student(classroom)
                })
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(student_no) = update.student_no {
            model.student_no = Set(student_no);
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
        if let Some(classroom_id) = update.classroom_id {
            model.classroom_id = Set(Some(classroom_id));
        }
        if let Some(class_no) = update.class_no {
            model.class_no = Set(Some(class_no));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量检查已存在的学号
    pub async fn check_student_nos_exist_impl(&self, student_nos: &[String]) -> Result<Vec<String>> {
        if student_nos.is_empty() {
            return Ok(Vec::new());
        }

        let existing = Students::find()
            .filter(Column::StudentNo.is_in(student_nos.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学号失败: {e}")))?;

        Ok(existing.into_iter().map(|m| m.student_no).collect())
    }

    /// 批量检查已存在的学生身份证号
    pub async fn check_student_citizen_ids_exist_impl(
        &self,
        citizen_ids: &[String],
    ) -> Result<Vec<String>> {
        if citizen_ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing = Students::find()
            .filter(Column::CitizenId.is_in(citizen_ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询身份证号失败: {e}")))?;

        Ok(existing.into_iter().map(|m| m.citizen_id).collect())
    }

    /// 加载单个班级引用
    pub(crate) async fn load_classroom_ref(
        &self,
        classroom_id: Option<i64>,
    ) -> Result<Option<ClassroomRef>> {
        let Some(classroom_id) = classroom_id else {
            return Ok(None);
        };

        let classroom = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(classroom.map(|m| m.to_ref()))
    }

    /// 批量加载班级引用
    pub(crate) async fn load_classroom_refs(
        &self,
        classroom_ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, ClassroomRef>> {
        let ids: Vec<i64> = classroom_ids.collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let classrooms = Classrooms::find()
            .filter(crate::entity::classrooms::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(classrooms.into_iter().map(|m| (m.id, m.to_ref())).collect())
    }
}
