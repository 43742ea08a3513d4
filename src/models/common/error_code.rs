use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码
//
// 分段约定：
// - 0          成功
// - 1000-1999  通用 / 请求参数
// - 2000-2999  认证授权
// - 3000-3999  账号
// - 4000-4999  学生/教师名录
// - 5000-5999  班级
// - 6000-6999  科目
// - 7000-7999  课程表
// - 8000-8999  新闻
// - 9000-9999  系统内部
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    InvalidQueryParameter = 1001,
    InvalidJsonPayload = 1002,
    InvalidPathParameter = 1003,

    Unauthorized = 2000,
    AuthFailed = 2001,
    TokenExpired = 2002,
    PermissionDenied = 2003,
    RateLimitExceeded = 2004,

    UserNotFound = 3000,
    UserAlreadyExists = 3001,
    UserCreationFailed = 3002,
    InvalidPassword = 3003,

    StudentNotFound = 4000,
    StudentAlreadyExists = 4001,
    TeacherNotFound = 4010,
    TeacherAlreadyExists = 4011,
    InvalidCitizenId = 4020,
    ImportFileMissingColumn = 4030,
    ImportFileParseFailed = 4031,
    ImportFileDataInvalid = 4032,
    ImportFileUploadFailed = 4033,

    ClassroomNotFound = 5000,
    ClassroomAlreadyExists = 5001,

    SubjectNotFound = 6000,
    SubjectAlreadyExists = 6001,
    SubjectGroupNotFound = 6002,

    ScheduleItemNotFound = 7000,
    SchedulePlacementInvalid = 7001,
    ScheduleConflict = 7002,
    ScheduleVersionConflict = 7003,

    NewsNotFound = 8000,

    InternalServerError = 9000,
}
