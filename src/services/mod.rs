//! 业务逻辑层
//!
//! 每个领域一个目录，目录下一个操作一个文件；mod.rs 中的服务结构体
//! 负责从请求中取存储句柄并分发到具体操作。

pub mod auth;
pub mod classrooms;
pub mod news;
pub mod schedule;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use news::NewsService;
pub use schedule::ScheduleService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;
