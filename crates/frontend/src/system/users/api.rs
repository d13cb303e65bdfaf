use contracts::system::users::{DeleteUsersDto, SetBlockedDto};

use crate::shared::api_utils;

/// Заблокировать или разблокировать пользователей
pub async fn set_blocked(ids: Vec<String>, blocked: bool) -> Result<(), String> {
    api_utils::post_json("/api/system/users/block", &SetBlockedDto { ids, blocked }).await
}

/// Удалить пользователей
pub async fn delete_users(ids: Vec<String>) -> Result<(), String> {
    api_utils::post_json("/api/system/users/delete", &DeleteUsersDto { ids }).await
}
