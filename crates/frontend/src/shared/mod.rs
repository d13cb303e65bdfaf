pub mod api_utils;
pub mod components;
pub mod datatable;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
