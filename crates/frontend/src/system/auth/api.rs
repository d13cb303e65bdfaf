use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Вход по логину и паролю
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| format!("Ошибка сериализации запроса: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка запроса: {}", e))?;

    if !response.ok() {
        return Err(format!("Вход не выполнен: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}

/// Обмен refresh-токена на новый access-токен
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)
        .map_err(|e| format!("Ошибка сериализации запроса: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка запроса: {}", e))?;

    if !response.ok() {
        return Err(format!("Обновление токена не выполнено: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}

/// Выход: отзыв refresh-токена на сервере
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)
        .map_err(|e| format!("Ошибка сериализации запроса: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка запроса: {}", e))?;

    if !response.ok() {
        return Err(format!("Выход не выполнен: {}", response.status()));
    }

    Ok(())
}

/// Текущий пользователь по access-токену
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Ошибка запроса: {}", e))?;

    if !response.ok() {
        return Err(format!("Профиль недоступен: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}
