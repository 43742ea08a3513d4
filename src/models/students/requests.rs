use serde::Deserialize;
use ts_rs::TS;

use super::entities::NamePrefix;
use crate::models::common::localized::LocalizedName;
use crate::models::common::pagination::PaginationQuery;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub classroom_id: Option<i64>,
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct CreateStudentRequest {
    pub student_no: String,
    pub prefix: NamePrefix,
    pub name: LocalizedName,
    pub birthdate: chrono::NaiveDate,
    pub citizen_id: String,
    pub user_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub class_no: Option<i32>,
}

// 学生更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct UpdateStudentRequest {
    pub student_no: Option<String>,
    pub prefix: Option<NamePrefix>,
    pub name: Option<LocalizedName>,
    pub birthdate: Option<chrono::NaiveDate>,
    pub citizen_id: Option<String>,
    pub user_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub class_no: Option<i32>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub classroom_id: Option<i64>,
    pub search: Option<String>,
}
