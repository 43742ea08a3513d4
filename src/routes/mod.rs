pub mod auth;

pub mod users;

pub mod students;

pub mod teachers;

pub mod classrooms;

pub mod subjects;

pub mod schedule;

pub mod news;

pub use auth::configure_auth_routes;
pub use classrooms::configure_classrooms_routes;
pub use news::configure_news_routes;
pub use schedule::configure_schedule_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_user_routes;
