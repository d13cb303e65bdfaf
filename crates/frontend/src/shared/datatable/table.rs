use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::bulk_bar::BulkActionBar;
use super::controller::TableController;
use super::grid::TableGrid;
use super::pagination::PaginationBar;
use super::toolbar::TableToolbar;
use super::types::{BulkAction, Column, DataRow, FilterDef, FilterValue};

/// Таблица поверх удалённого list-эндпоинта.
///
/// Страница передаёт эндпоинт и статические описания колонок,
/// фильтров и массовых операций; всё состояние живёт в контроллере
/// и умирает вместе с таблицей.
#[component]
pub fn DataTable<T>(
    /// list-эндпоинт, например "/api/appointments/list"
    endpoint: &'static str,
    columns: Vec<Column<T>>,
    #[prop(optional)] filters: Vec<FilterDef>,
    #[prop(optional)] bulk_actions: Vec<BulkAction<T>>,
    /// Доступ к контроллеру для родительской страницы
    #[prop(optional)]
    on_init: Option<Callback<TableController<T>>>,
) -> impl IntoView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let declared_columns: Vec<String> = columns.iter().map(|c| c.field.to_string()).collect();
    let column_options: Vec<(&'static str, &'static str)> =
        columns.iter().map(|c| (c.field, c.label)).collect();

    let controller = TableController::<T>::new(endpoint, declared_columns);
    let state = controller.state();
    let refresh = Callback::new(move |_: ()| controller.refresh());

    let defaults: BTreeMap<String, FilterValue> = filters
        .iter()
        .filter_map(|def| {
            def.default
                .clone()
                .map(|value| (def.field.to_string(), value))
        })
        .collect();
    if !defaults.is_empty() {
        controller.seed_filters(defaults);
    }

    if let Some(on_init) = on_init {
        on_init.run(controller);
    }

    let has_selection = !bulk_actions.is_empty();

    // первый запрос при монтировании
    Effect::new(move |_| {
        controller.load();
    });

    view! {
        <div class="datatable">
            <TableToolbar controller=controller filters=filters column_options=column_options />
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|err| {
                        view! {
                            <div class="alert alert--error">
                                <span>{err}</span>
                                <button class="btn" on:click=move |_| controller.refresh()>
                                    "Повторить"
                                </button>
                            </div>
                        }
                    })
            }}
            <BulkActionBar controller=controller actions=bulk_actions refresh=refresh />
            <TableGrid
                controller=controller
                columns=columns
                has_selection=has_selection
                refresh=refresh
            />
            <PaginationBar
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || state.with(|s| s.pages))
                total_count=Signal::derive(move || state.with(|s| s.record_count))
                selected_count=Signal::derive(move || state.with(|s| s.selected_rows.len()))
                page_size=Signal::derive(move || state.with(|s| s.rows_per_page))
                on_page_change=Callback::new(move |page| controller.set_current_page(page))
                on_page_size_change=Callback::new(move |size| controller.set_rows_per_page(size))
            />
        </div>
    }
}
