mod page;

pub use page::MedicalRecordsPage;
