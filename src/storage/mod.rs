use std::sync::Arc;

use crate::models::{
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    news::{
        entities::NewsArticle,
        requests::{CreateNewsRequest, NewsListQuery, UpdateNewsRequest},
        responses::NewsListResponse,
    },
    schedule::{
        entities::{Day, ScheduleItem},
        requests::{CreateScheduleItemRequest, ScheduleItemFilter, UpdateScheduleItemRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::{Subject, SubjectGroup},
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号（password 字段应已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取账号信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取账号信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出账号
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新账号信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除账号
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新账号最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计账号数量（用于首次启动种子管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 学生名录方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生（支持按班级过滤与姓名/学号搜索）
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 批量检查已存在的学号（导入去重）
    async fn check_student_nos_exist(&self, student_nos: &[String]) -> Result<Vec<String>>;
    // 批量检查已存在的学生身份证号（导入去重）
    async fn check_student_citizen_ids_exist(&self, citizen_ids: &[String]) -> Result<Vec<String>>;

    /// 教师名录方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过关联账号获取教师（课程表写入路径用）
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    // 列出教师（支持按科目组过滤与搜索）
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 更新教师
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 批量检查已存在的工号（导入去重）
    async fn check_teacher_nos_exist(&self, teacher_nos: &[String]) -> Result<Vec<String>>;
    // 批量检查已存在的教师身份证号（导入去重）
    async fn check_teacher_citizen_ids_exist(&self, citizen_ids: &[String]) -> Result<Vec<String>>;

    /// 班级管理方法
    // 创建班级
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom>;
    // 通过ID获取班级
    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>>;
    // 列出班级
    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse>;
    // 更新班级（advisor_ids 提供时整体替换班主任）
    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    // 删除班级
    async fn delete_classroom(&self, classroom_id: i64) -> Result<bool>;
    // 班级的班主任列表
    async fn list_classroom_advisors(&self, classroom_id: i64) -> Result<Vec<Teacher>>;
    // 班级花名册（按班内序号排序）
    async fn list_classroom_students(&self, classroom_id: i64) -> Result<Vec<Student>>;
    // 班级在册人数
    async fn count_classroom_students(&self, classroom_id: i64) -> Result<i64>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 更新科目（teacher_ids 提供时整体替换任课教师）
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;
    // 科目组列表
    async fn list_subject_groups(&self) -> Result<Vec<SubjectGroup>>;
    // 创建科目组
    async fn create_subject_group(&self, name_th: String, name_en: Option<String>)
    -> Result<SubjectGroup>;

    /// 课程表方法
    // 按教师或班级列出课程表记录（插入顺序，即主键顺序）
    async fn list_schedule_items(&self, filter: ScheduleItemFilter) -> Result<Vec<ScheduleItem>>;
    // 通过ID获取课程表记录
    async fn get_schedule_item_by_id(&self, item_id: i64) -> Result<Option<ScheduleItem>>;
    // 创建课程表记录
    async fn create_schedule_item(
        &self,
        teacher_id: i64,
        item: CreateScheduleItemRequest,
    ) -> Result<ScheduleItem>;
    // 更新课程表记录；库中版本与请求版本不一致时返回 VersionConflict 错误
    async fn update_schedule_item(
        &self,
        item_id: i64,
        update: UpdateScheduleItemRequest,
    ) -> Result<Option<ScheduleItem>>;
    // 移动课程表记录（一次更新完成拖拽落点），同样受版本保护
    async fn move_schedule_item(
        &self,
        item_id: i64,
        day: Day,
        start_time: i32,
        expected_version: i64,
    ) -> Result<Option<ScheduleItem>>;
    // 删除课程表记录
    async fn delete_schedule_item(&self, item_id: i64) -> Result<bool>;

    /// 新闻方法
    // 创建新闻
    async fn create_news(&self, news: CreateNewsRequest) -> Result<NewsArticle>;
    // 通过ID获取新闻
    async fn get_news_by_id(&self, news_id: i64) -> Result<Option<NewsArticle>>;
    // 列出新闻（按发布时间倒序）
    async fn list_news_with_pagination(&self, query: NewsListQuery) -> Result<NewsListResponse>;
    // 更新新闻
    async fn update_news(
        &self,
        news_id: i64,
        update: UpdateNewsRequest,
    ) -> Result<Option<NewsArticle>>;
    // 删除新闻
    async fn delete_news(&self, news_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
