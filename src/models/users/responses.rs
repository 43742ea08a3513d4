use super::entities::User;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 账号列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<User>,
}
