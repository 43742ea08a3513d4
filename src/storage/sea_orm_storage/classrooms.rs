//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::class_advisors::{
    ActiveModel as ClassAdvisorActiveModel, Column as ClassAdvisorColumn, Entity as ClassAdvisors,
};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::entity::prelude::{Students, Teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    students::entities::Student,
    teachers::entities::Teacher,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级并登记班主任
    pub async fn create_classroom_impl(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            number: Set(req.number),
            year: Set(req.year),
            semester: Set(req.semester),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建班级失败: {e}")))?;

        self.replace_classroom_advisors(result.id, &req.advisor_ids)
            .await?;

        Ok(result.into_classroom())
    }

    /// 通过 ID 获取班级
    pub async fn get_classroom_by_id_impl(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_classroom()))
    }

    /// 分页列出班级
    pub async fn list_classrooms_with_pagination_impl(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classrooms::find();

        // 学年/学期过滤
        if let Some(year) = query.year {
            select = select.filter(Column::Year.eq(year));
        }
        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        // 排序：班号升序
        select = select.order_by_asc(Column::Number);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classrooms = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(ClassroomListResponse {
            items: classrooms.into_iter().map(|m| m.into_classroom()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级
    pub async fn update_classroom_impl(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        let existing = self.get_classroom_by_id_impl(classroom_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(classroom_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(number) = update.number {
            model.number = Set(number);
        }
        if let Some(year) = update.year {
            model.year = Set(year);
        }
        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新班级失败: {e}")))?;

        // 提供班主任列表时整体替换
        if let Some(advisor_ids) = update.advisor_ids {
            self.replace_classroom_advisors(classroom_id, &advisor_ids)
                .await?;
        }

        self.get_classroom_by_id_impl(classroom_id).await
    }

    /// 删除班级
    pub async fn delete_classroom_impl(&self, classroom_id: i64) -> Result<bool> {
        let result = Classrooms::delete_by_id(classroom_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 班级的班主任列表
    pub async fn list_classroom_advisors_impl(&self, classroom_id: i64) -> Result<Vec<Teacher>> {
        let advisor_rows = ClassAdvisors::find()
            .filter(ClassAdvisorColumn::ClassroomId.eq(classroom_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班主任失败: {e}")))?;

        let teacher_ids: Vec<i64> = advisor_rows.iter().map(|a| a.teacher_id).collect();
        if teacher_ids.is_empty() {
            return Ok(Vec::new());
        }

        let teachers = Teachers::find()
            .filter(crate::entity::teachers::Column::Id.is_in(teacher_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?;

        self.hydrate_teachers(teachers).await
    }

    /// 班级花名册（按班内序号排序）
    pub async fn list_classroom_students_impl(&self, classroom_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(crate::entity::students::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(crate::entity::students::Column::ClassNo)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询花名册失败: {e}")))?;

        let classroom_refs = self
            .load_classroom_refs(students.iter().filter_map(|m| m.classroom_id))
            .await?;

        Ok(students
            .into_iter()
            .map(|m| {
                let classroom = m.classroom_id.and_then(|id| classroom_refs.get(&id).cloned());
                m.into_student(classroom)
            })
            .collect())
    }

    /// 班级在册人数
    pub async fn count_classroom_students_impl(&self, classroom_id: i64) -> Result<i64> {
        let count = Students::find()
            .filter(crate::entity::students::Column::ClassroomId.eq(classroom_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计在册人数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 整体替换班级的班主任登记
    async fn replace_classroom_advisors(
        &self,
        classroom_id: i64,
        advisor_ids: &[i64],
    ) -> Result<()> {
        ClassAdvisors::delete_many()
            .filter(ClassAdvisorColumn::ClassroomId.eq(classroom_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("清除班主任失败: {e}")))?;

        for teacher_id in advisor_ids {
            let model = ClassAdvisorActiveModel {
                classroom_id: Set(classroom_id),
                teacher_id: Set(*teacher_id),
                ..Default::default()
            };
            model.insert(&self.db).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("登记班主任失败: {e}"))
            })?;
        }

        Ok(())
    }
}
