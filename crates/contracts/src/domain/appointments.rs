use serde::{Deserialize, Serialize};

/// Статус приёма. `Pending` — ожидает подтверждения регистратурой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Ожидает подтверждения",
            AppointmentStatus::Confirmed => "Подтверждён",
            AppointmentStatus::Completed => "Завершён",
            AppointmentStatus::Cancelled => "Отменён",
        }
    }
}

/// Строка списка приёмов (эндпоинт `/api/appointments/list`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub scheduled_at: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub status: AppointmentStatus,
    pub reason: Option<String>,
}

/// Массовое подтверждение/отмена приёмов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentIdsDto {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Pending).unwrap(),
            r#""pending""#
        );
        let parsed: AppointmentStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(parsed, AppointmentStatus::Cancelled);
    }
}
