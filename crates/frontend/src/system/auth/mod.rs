pub mod api;
pub mod context;
pub mod guard;
pub mod refresh;
pub mod storage;
