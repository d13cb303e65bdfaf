use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::Spinner;

use super::controller::TableController;
use super::types::{CellContext, CellRender, Column, DataRow};
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Сетка таблицы: заголовки с сортировкой, чекбоксы выбора, строки.
/// Во время загрузки прежние строки остаются под полупрозрачным
/// оверлеем со спиннером; пустая выборка рендерит одну строку-заглушку.
#[component]
pub fn TableGrid<T>(
    controller: TableController<T>,
    columns: Vec<Column<T>>,
    /// Колонка чекбоксов добавляется только при наличии массовых операций
    has_selection: bool,
    refresh: Callback<()>,
) -> impl IntoView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let state = controller.state();
    let columns = StoredValue::new(columns);

    let visible_columns = move || {
        state.with(|s| {
            columns.with_value(|cols| {
                cols.iter()
                    .filter(|col| s.is_visible(col.field))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="table-wrap">
            <table class="table" class=("table--loading", move || state.with(|s| s.loading))>
                <thead>
                    <tr>
                        {has_selection.then(|| view! { <HeaderCheckbox controller=controller /> })}
                        {move || {
                            visible_columns()
                                .into_iter()
                                .map(|col| header_cell(controller, col))
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.with(|s| s.data.clone());
                        let loading = state.with(|s| s.loading);
                        if rows.is_empty() && !loading {
                            let colspan = visible_columns().len() + usize::from(has_selection);
                            view! {
                                <tr class="table__row table__row--empty">
                                    <td class="table__cell" colspan=colspan>"Нет данных"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    render_row(controller, row, visible_columns(), has_selection, refresh)
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
            <Show when=move || state.with(|s| s.loading)>
                <div class="table__loading-overlay">
                    <Spinner />
                </div>
            </Show>
        </div>
    }
}

fn header_cell<T>(controller: TableController<T>, col: Column<T>) -> AnyView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let state = controller.state();
    let field = col.field;
    let style = col
        .width
        .map(|width| format!("width: {};", width))
        .unwrap_or_default();

    if col.sortable {
        view! {
            <th
                class="table__header table__header--sortable"
                style=style
                on:click=move |_| controller.toggle_sort(field)
            >
                {col.label}
                <span class=move || state.with(|s| get_sort_class(s.sort_by.as_deref(), field))>
                    {move || {
                        state.with(|s| get_sort_indicator(s.sort_by.as_deref(), field, s.sort_dir))
                    }}
                </span>
            </th>
        }
        .into_any()
    } else {
        // клика нет — несортируемую колонку отсортировать нельзя
        view! {
            <th class="table__header" style=style>{col.label}</th>
        }
        .into_any()
    }
}

fn render_row<T>(
    controller: TableController<T>,
    row: T,
    visible_columns: Vec<Column<T>>,
    has_selection: bool,
    refresh: Callback<()>,
) -> AnyView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let state = controller.state();
    let row_id = row.id();

    let checkbox_cell = has_selection.then(|| {
        let row_for_change = row.clone();
        let row_id = row_id.clone();
        view! {
            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || state.with(|s| s.is_selected(&row_id))
                    on:change=move |ev| {
                        controller.toggle_row(row_for_change.clone(), event_target_checked(&ev));
                    }
                />
            </td>
        }
    });

    let cells = visible_columns
        .into_iter()
        .map(|col| {
            let value = row.field_text(col.field);
            match col.render {
                CellRender::Text => view! {
                    <td class="table__cell">{value.unwrap_or_default()}</td>
                }
                .into_any(),
                CellRender::Custom(render) => {
                    let content = render.run(CellContext {
                        value,
                        row: row.clone(),
                        refresh,
                    });
                    view! { <td class="table__cell">{content}</td> }.into_any()
                }
            }
        })
        .collect_view();

    view! {
        <tr class="table__row">
            {checkbox_cell}
            {cells}
        </tr>
    }
    .into_any()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Чекбокс заголовка: три состояния относительно текущей страницы
#[component]
fn HeaderCheckbox<T>(controller: TableController<T>) -> impl IntoView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let state = controller.state();

    let checkbox_state = Signal::derive(move || {
        state.with(|s| {
            if s.data.is_empty() {
                return CheckboxState::Unchecked;
            }
            let selected_on_page = s.data.iter().filter(|row| s.is_selected(&row.id())).count();
            if selected_on_page == 0 {
                CheckboxState::Unchecked
            } else if selected_on_page == s.data.len() {
                CheckboxState::Checked
            } else {
                CheckboxState::Indeterminate
            }
        })
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate выставляется только через DOM-свойство
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(matches!(checkbox_state.get(), CheckboxState::Indeterminate));
        }
    });

    view! {
        <th class="table__header table__header--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    controller.select_all_on_page(event_target_checked(&ev));
                }
            />
        </th>
    }
}
