//! Универсальная таблица поверх удалённого list-эндпоинта
//!
//! Страница объявляет колонки, фильтры и массовые операции — таблица
//! сама ведёт пагинацию, сортировку, фильтрацию и выбор строк,
//! перезапрашивая данные при каждом изменении влияющего состояния.
//!
//! Состояние ([`TableState`]) — чистая машина без реактивности,
//! контроллер ([`TableController`]) оборачивает её в сигнал и ходит
//! в сеть, компоненты рендерят строго из состояния контроллера.

mod bulk_bar;
mod controller;
mod grid;
mod pagination;
mod query;
mod state;
mod table;
mod toolbar;
mod types;

pub use controller::TableController;
pub use state::TableState;
pub use table::DataTable;
pub use types::{
    BulkAction, BulkContext, CellContext, CellRender, Column, DataRow, FilterBinding, FilterDef,
    FilterKind, FilterValue, SelectOption, SortDir, PAGE_SIZES,
};
