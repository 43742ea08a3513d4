//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classrooms;
mod news;
mod schedule_items;
mod students;
mod subjects;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生名录模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn check_student_nos_exist(&self, student_nos: &[String]) -> Result<Vec<String>> {
        self.check_student_nos_exist_impl(student_nos).await
    }

    async fn check_student_citizen_ids_exist(&self, citizen_ids: &[String]) -> Result<Vec<String>> {
        self.check_student_citizen_ids_exist_impl(citizen_ids).await
    }

    // 教师名录模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn check_teacher_nos_exist(&self, teacher_nos: &[String]) -> Result<Vec<String>> {
        self.check_teacher_nos_exist_impl(teacher_nos).await
    }

    async fn check_teacher_citizen_ids_exist(&self, citizen_ids: &[String]) -> Result<Vec<String>> {
        self.check_teacher_citizen_ids_exist_impl(citizen_ids).await
    }

    // 班级模块
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom> {
        self.create_classroom_impl(classroom).await
    }

    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_by_id_impl(classroom_id).await
    }

    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        self.list_classrooms_with_pagination_impl(query).await
    }

    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(classroom_id, update).await
    }

    async fn delete_classroom(&self, classroom_id: i64) -> Result<bool> {
        self.delete_classroom_impl(classroom_id).await
    }

    async fn list_classroom_advisors(&self, classroom_id: i64) -> Result<Vec<Teacher>> {
        self.list_classroom_advisors_impl(classroom_id).await
    }

    async fn list_classroom_students(&self, classroom_id: i64) -> Result<Vec<Student>> {
        self.list_classroom_students_impl(classroom_id).await
    }

    async fn count_classroom_students(&self, classroom_id: i64) -> Result<i64> {
        self.count_classroom_students_impl(classroom_id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, update).await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    async fn list_subject_groups(&self) -> Result<Vec<SubjectGroup>> {
        self.list_subject_groups_impl().await
    }

    async fn create_subject_group(
        &self,
        name_th: String,
        name_en: Option<String>,
    ) -> Result<SubjectGroup> {
        self.create_subject_group_impl(name_th, name_en).await
    }

    // 课程表模块
    async fn list_schedule_items(&self, filter: ScheduleItemFilter) -> Result<Vec<ScheduleItem>> {
        self.list_schedule_items_impl(filter).await
    }

    async fn get_schedule_item_by_id(&self, item_id: i64) -> Result<Option<ScheduleItem>> {
        self.get_schedule_item_by_id_impl(item_id).await
    }

    async fn create_schedule_item(
        &self,
        teacher_id: i64,
        item: CreateScheduleItemRequest,
    ) -> Result<ScheduleItem> {
        self.create_schedule_item_impl(teacher_id, item).await
    }

    async fn update_schedule_item(
        &self,
        item_id: i64,
        update: UpdateScheduleItemRequest,
    ) -> Result<Option<ScheduleItem>> {
        self.update_schedule_item_impl(item_id, update).await
    }

    async fn move_schedule_item(
        &self,
        item_id: i64,
        day: Day,
        start_time: i32,
        expected_version: i64,
    ) -> Result<Option<ScheduleItem>> {
        self.move_schedule_item_impl(item_id, day, start_time, expected_version)
            .await
    }

    async fn delete_schedule_item(&self, item_id: i64) -> Result<bool> {
        self.delete_schedule_item_impl(item_id).await
    }

    // 新闻模块
    async fn create_news(&self, news: CreateNewsRequest) -> Result<NewsArticle> {
        self.create_news_impl(news).await
    }

    async fn get_news_by_id(&self, news_id: i64) -> Result<Option<NewsArticle>> {
        self.get_news_by_id_impl(news_id).await
    }

    async fn list_news_with_pagination(&self, query: NewsListQuery) -> Result<NewsListResponse> {
        self.list_news_with_pagination_impl(query).await
    }

    async fn update_news(
        &self,
        news_id: i64,
        update: UpdateNewsRequest,
    ) -> Result<Option<NewsArticle>> {
        self.update_news_impl(news_id, update).await
    }

    async fn delete_news(&self, news_id: i64) -> Result<bool> {
        self.delete_news_impl(news_id).await
    }
}
