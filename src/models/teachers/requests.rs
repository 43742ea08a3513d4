use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::localized::LocalizedName;
use crate::models::common::pagination::PaginationQuery;
use crate::models::students::entities::NamePrefix;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub subject_group_id: Option<i64>,
    pub search: Option<String>,
}

// 教师创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct CreateTeacherRequest {
    pub teacher_no: String,
    pub prefix: NamePrefix,
    pub name: LocalizedName,
    pub birthdate: chrono::NaiveDate,
    pub citizen_id: String,
    pub user_id: Option<i64>,
    pub subject_group_id: i64,
}

// 教师更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct UpdateTeacherRequest {
    pub teacher_no: Option<String>,
    pub prefix: Option<NamePrefix>,
    pub name: Option<LocalizedName>,
    pub birthdate: Option<chrono::NaiveDate>,
    pub citizen_id: Option<String>,
    pub user_id: Option<i64>,
    pub subject_group_id: Option<i64>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_group_id: Option<i64>,
    pub search: Option<String>,
}
