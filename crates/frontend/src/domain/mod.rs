pub mod appointments;
pub mod medical_records;
