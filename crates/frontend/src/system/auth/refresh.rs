//! Single-flight обновление access-токена
//!
//! Несколько компонентов могут одновременно обнаружить протухший
//! access-токен. Вместо глобального флага — один разделяемый future
//! на сессию (ключ — refresh-токен): параллельные вызовы с тем же
//! ключом ждут общий результат, вызов с другим ключом (сессия уже
//! сменилась) запускает собственный обмен.

use std::cell::RefCell;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use super::{api, storage};

type SharedRefresh = Shared<LocalBoxFuture<'static, Result<String, String>>>;

thread_local! {
    static IN_FLIGHT: RefCell<Option<(String, SharedRefresh)>> = const { RefCell::new(None) };
}

/// Вызов присоединяется к текущему обмену этой же сессии
fn same_session(current_key: &str, in_flight_key: &str) -> bool {
    current_key == in_flight_key
}

/// Обменивает refresh-токен на новый access-токен и сохраняет его.
/// Параллельные вызовы для одной сессии разделяют один запрос.
pub async fn refresh_access_token() -> Result<String, String> {
    let session_key = storage::get_refresh_token().ok_or("Нет refresh-токена")?;

    let flight = IN_FLIGHT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some((key, flight)) = slot.as_ref() {
            if same_session(&session_key, key) {
                return flight.clone();
            }
        }
        let flight: SharedRefresh = run_refresh(session_key.clone()).boxed_local().shared();
        *slot = Some((session_key.clone(), flight.clone()));
        flight
    });

    let result = flight.await;

    IN_FLIGHT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if matches!(slot.as_ref(), Some((key, _)) if same_session(&session_key, key)) {
            *slot = None;
        }
    });

    result
}

async fn run_refresh(refresh_token: String) -> Result<String, String> {
    let response = api::refresh_token(refresh_token).await?;
    storage::save_access_token(&response.access_token);
    Ok(response.access_token)
}

#[cfg(test)]
mod tests {
    use super::same_session;

    #[test]
    fn test_same_session_key_comparison() {
        assert!(same_session("rt-1", "rt-1"));
        assert!(!same_session("rt-1", "rt-2"));
        assert!(!same_session("", "rt-1"));
    }
}
