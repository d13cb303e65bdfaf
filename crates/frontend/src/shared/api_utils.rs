//! Утилиты для общения frontend с REST backend
//!
//! Построение URL и типовые JSON-запросы с авторизацией.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Базовый URL backend-сервера
///
/// Собирается из текущего window.location, backend слушает порт 8080.
/// Возвращает пустую строку, если window недоступен (тесты вне браузера).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Полный URL по пути вида "/api/appointments/list"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// GET с Bearer-токеном (если есть) и декодированием JSON-ответа
pub async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, String> {
    let mut request = Request::get(&api_url(path_and_query));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Ошибка запроса: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP ошибка: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Ошибка разбора ответа: {}", e))
}

/// POST JSON-тела с Bearer-токеном; тело ответа игнорируется
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let mut request = Request::post(&api_url(path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(body)
        .map_err(|e| format!("Ошибка сериализации запроса: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Ошибка запроса: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP ошибка: {}", response.status()));
    }

    Ok(())
}
