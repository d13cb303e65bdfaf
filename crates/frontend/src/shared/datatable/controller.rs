//! Реактивная обёртка машины состояния: сигнал + запросы к эндпоинту

use std::collections::BTreeMap;

use contracts::shared::records::RecordsPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::state::TableState;
use super::types::{DataRow, FilterValue};
use crate::shared::api_utils;

/// Контроллер одной таблицы. Каждый мутатор, меняющий выборку,
/// синхронно обновляет состояние и запускает ровно один GET.
/// Передаётся странице через `on_init` для императивного управления.
pub struct TableController<T: 'static> {
    endpoint: &'static str,
    state: RwSignal<TableState<T>>,
}

impl<T: 'static> Clone for TableController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for TableController<T> {}

impl<T> TableController<T>
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(endpoint: &'static str, declared_columns: Vec<String>) -> Self {
        Self {
            endpoint,
            state: RwSignal::new(TableState::new(declared_columns)),
        }
    }

    pub fn state(&self) -> RwSignal<TableState<T>> {
        self.state
    }

    /// Перезапрос с текущим состоянием, ничего не меняя
    pub fn refresh(&self) {
        self.load();
    }

    pub fn set_current_page(&self, page: usize) {
        self.mutate_and_fetch(|s| s.set_current_page(page));
    }

    pub fn set_rows_per_page(&self, size: usize) {
        self.mutate_and_fetch(|s| s.set_rows_per_page(size));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.mutate_and_fetch(|s| s.toggle_sort(field));
    }

    pub fn apply_filters(&self, values: BTreeMap<String, FilterValue>) {
        self.mutate_and_fetch(|s| s.apply_filters(values));
    }

    /// Значения по умолчанию из описаний фильтров; вызывается до
    /// первого запроса и запрос не порождает
    pub fn seed_filters(&self, values: BTreeMap<String, FilterValue>) {
        self.state.update(|s| s.seed_filters(values));
    }

    pub fn set_visible_columns(&self, fields: Vec<String>) {
        self.state.update(|s| s.set_visible_columns(fields));
    }

    pub fn toggle_row(&self, row: T, checked: bool) {
        self.state.update(|s| s.toggle_row(row, checked));
    }

    pub fn select_all_on_page(&self, checked: bool) {
        self.state.update(|s| s.select_all_on_page(checked));
    }

    fn mutate_and_fetch(&self, mutate: impl FnOnce(&mut TableState<T>) -> bool) {
        let due = self.state.try_update(mutate).unwrap_or(false);
        if due {
            self.load();
        }
    }

    /// Единственная асинхронная операция таблицы. Ответ применяется
    /// только если его поколение всё ещё актуально.
    pub fn load(&self) {
        let begun = self.state.try_update(|s| s.begin_fetch());
        let Some((generation, query)) = begun else {
            return;
        };

        let state = self.state;
        let url = format!("{}?{}", self.endpoint, query);
        spawn_local(async move {
            match api_utils::get_json::<RecordsPage<T>>(&url).await {
                Ok(page) => state.update(|s| s.apply_page(generation, page)),
                Err(e) => {
                    leptos::logging::log!("Ошибка загрузки списка {}: {}", url, e);
                    state.update(|s| s.apply_error(generation, e));
                }
            }
        });
    }
}
