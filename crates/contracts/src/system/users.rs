use serde::{Deserialize, Serialize};

use super::auth::Role;

/// Строка списка пользователей (эндпоинт `/api/system/users/list`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub is_blocked: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// Массовая блокировка/разблокировка.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBlockedDto {
    pub ids: Vec<String>,
    pub blocked: bool,
}

/// Массовое удаление пользователей.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUsersDto {
    pub ids: Vec<String>,
}
