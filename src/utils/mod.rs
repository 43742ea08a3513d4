pub mod extractor;
pub mod import;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeClassroomIdI64, SafeNewsIdI64, SafeScheduleItemIdI64, SafeStudentIdI64, SafeSubjectIdI64,
    SafeTeacherIdI64, SafeUserIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
