//! 路径参数安全提取器
//!
//! 把路径中的数字 ID 解析为 i64，解析失败统一返回 400 信封而不是 404。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义 i64 路径参数提取器的宏
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let result = req
                    .match_info()
                    .get($param)
                    .and_then(|value| value.parse::<i64>().ok())
                    .filter(|id| *id > 0)
                    .map($name)
                    .ok_or_else(|| {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::InvalidPathParameter,
                            format!("Invalid path parameter: {}", $param),
                        ));
                        InternalError::from_response(
                            format!("Invalid path parameter: {}", $param),
                            response,
                        )
                        .into()
                    });
                ready(result)
            }
        }
    };
}

define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_i64_extractor!(SafeClassroomIdI64, "classroom_id");
define_safe_i64_extractor!(SafeSubjectIdI64, "subject_id");
define_safe_i64_extractor!(SafeScheduleItemIdI64, "item_id");
define_safe_i64_extractor!(SafeNewsIdI64, "news_id");
