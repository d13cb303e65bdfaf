//! Общие wire-типы, разделяемые frontend и REST backend клиники.

pub mod domain;
pub mod shared;
pub mod system;
