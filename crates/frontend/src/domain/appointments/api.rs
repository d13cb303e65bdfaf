use contracts::domain::appointments::AppointmentIdsDto;

use crate::shared::api_utils;

/// Подтвердить приёмы, ожидающие подтверждения
pub async fn confirm(ids: Vec<String>) -> Result<(), String> {
    api_utils::post_json("/api/appointments/confirm", &AppointmentIdsDto { ids }).await
}

/// Отменить приёмы
pub async fn cancel(ids: Vec<String>) -> Result<(), String> {
    api_utils::post_json("/api/appointments/cancel", &AppointmentIdsDto { ids }).await
}
