use super::entities::{UserRole, UserStatus};
use serde::Deserialize;
use ts_rs::TS;

// 账户创建请求（管理员建档时自动开户，也用于初始管理员）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub related_id: Option<i64>,
}

// 账户更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub status: Option<UserStatus>,
}
