use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Consultation,
    Diagnosis,
    Prescription,
    LabResult,
}

impl RecordType {
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Consultation => "Консультация",
            RecordType::Diagnosis => "Диагноз",
            RecordType::Prescription => "Назначение",
            RecordType::LabResult => "Анализы",
        }
    }
}

/// Строка медкарты (эндпоинт `/api/medical-records/list`). Только чтение.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub recorded_at: String,
    pub title: String,
    pub record_type: RecordType,
    pub doctor_name: String,
    pub patient_name: String,
}
