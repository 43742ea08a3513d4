use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::localized::LocalizedName;
use crate::models::classrooms::entities::ClassroomRef;

// 称谓前缀
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub enum NamePrefix {
    #[serde(rename = "Master")]
    Master,
    #[serde(rename = "Mr.")]
    Mr,
    #[serde(rename = "Mrs.")]
    Mrs,
    #[serde(rename = "Miss.")]
    Miss,
}

impl std::fmt::Display for NamePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NamePrefix::Master => "Master",
            NamePrefix::Mr => "Mr.",
            NamePrefix::Mrs => "Mrs.",
            NamePrefix::Miss => "Miss.",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for NamePrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Master" => Ok(NamePrefix::Master),
            "Mr." | "Mr" => Ok(NamePrefix::Mr),
            "Mrs." | "Mrs" => Ok(NamePrefix::Mrs),
            "Miss." | "Miss" => Ok(NamePrefix::Miss),
            _ => Err(format!("Invalid name prefix: {s}")),
        }
    }
}

// 学生名录条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct Student {
    pub id: i64,
    // 5 位学号
    pub student_no: String,
    pub prefix: NamePrefix,
    pub name: LocalizedName,
    pub birthdate: chrono::NaiveDate,
    // 13 位公民身份证号
    pub citizen_id: String,
    // 关联登录账号（可选）
    pub user_id: Option<i64>,
    // 所在班级与班内序号（未分班时为空）
    pub classroom: Option<ClassroomRef>,
    pub class_no: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
