use std::collections::BTreeMap;

use contracts::shared::records::RecordsPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::controller::TableController;
use super::types::{DataRow, FilterBinding, FilterDef, FilterKind, FilterValue, SelectOption};
use crate::shared::api_utils;
use crate::shared::icons::icon;

type Draft = RwSignal<BTreeMap<String, FilterValue>>;

/// Тулбар таблицы: контролы фильтров с черновиком значений и пикер
/// видимости колонок. Черновик попадает в состояние таблицы только
/// по кнопке "Применить".
#[component]
pub fn TableToolbar<T>(
    controller: TableController<T>,
    filters: Vec<FilterDef>,
    /// (field, label) всех объявленных колонок
    column_options: Vec<(&'static str, &'static str)>,
) -> impl IntoView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let state = controller.state();
    let draft: Draft = RwSignal::new(initial_draft(&filters));
    let has_filters = !filters.is_empty();
    let filters = StoredValue::new(filters);
    let column_options = StoredValue::new(column_options);
    let (picker_open, set_picker_open) = signal(false);

    let active_count = move || state.with(|s| s.filters.len());

    let apply = move |_| controller.apply_filters(draft.get());
    let reset = move |_| {
        draft.set(BTreeMap::new());
        controller.apply_filters(BTreeMap::new());
    };

    let toggle_column = move |field: String, checked: bool| {
        let mut fields = state.with_untracked(|s| s.visible_columns.clone());
        fields.retain(|f| f != &field);
        if checked {
            fields.push(field);
        }
        controller.set_visible_columns(fields);
    };

    view! {
        <div class="table-toolbar">
            <Show when=move || has_filters>
                <div class="table-toolbar__filters">
                    <span class="table-toolbar__title">
                        {icon("filter")}
                        "Фильтры"
                        {move || {
                            let count = active_count();
                            if count > 0 {
                                view! { <span class="badge badge--primary">{count}</span> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </span>
                    {move || {
                        filters.with_value(|defs| {
                            defs.iter()
                                .map(|def| filter_control(def.clone(), draft))
                                .collect_view()
                        })
                    }}
                    <button class="btn btn--primary" on:click=apply>"Применить"</button>
                    <button class="btn" on:click=reset>"Сбросить"</button>
                </div>
            </Show>
            <div class="column-picker">
                <button
                    class="btn btn--ghost"
                    title="Видимость колонок"
                    on:click=move |_| set_picker_open.update(|open| *open = !*open)
                >
                    {icon("columns")}
                </button>
                <Show when=move || picker_open.get()>
                    <div class="column-picker__popover">
                        {move || {
                            column_options.with_value(|cols| {
                                cols.iter()
                                    .map(|(field, label)| {
                                        let field = *field;
                                        view! {
                                            <label class="column-picker__item">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || state.with(|s| s.is_visible(field))
                                                    on:change=move |ev| {
                                                        toggle_column(field.to_string(), event_target_checked(&ev));
                                                    }
                                                />
                                                {*label}
                                            </label>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn initial_draft(filters: &[FilterDef]) -> BTreeMap<String, FilterValue> {
    filters
        .iter()
        .filter_map(|def| {
            def.default
                .clone()
                .map(|value| (def.field.to_string(), value))
        })
        .collect()
}

fn draft_text(draft: Draft, field: &str) -> String {
    draft.with(|d| {
        d.get(field)
            .and_then(|v| v.as_text().map(|s| s.to_string()))
            .unwrap_or_default()
    })
}

fn set_draft_text(draft: Draft, field: &'static str, value: String) {
    draft.update(|d| {
        if value.is_empty() {
            d.remove(field);
        } else {
            d.insert(field.to_string(), FilterValue::Text(value));
        }
    });
}

fn filter_control(def: FilterDef, draft: Draft) -> AnyView {
    let field = def.field;
    let label = def.label;

    let input = match def.kind {
        FilterKind::Text => text_input(draft, field, "text"),
        FilterKind::Number => text_input(draft, field, "number"),
        FilterKind::Date => text_input(draft, field, "date"),
        FilterKind::Select(options) => static_select(draft, field, options),
        FilterKind::Checkbox => {
            return view! {
                <label class="table-toolbar__filter table-toolbar__filter--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            draft.with(|d| matches!(d.get(field), Some(FilterValue::Flag(true))))
                        }
                        on:change=move |ev| {
                            draft.update(|d| {
                                if event_target_checked(&ev) {
                                    d.insert(field.to_string(), FilterValue::Flag(true));
                                } else {
                                    d.remove(field);
                                }
                            });
                        }
                    />
                    <span>{label}</span>
                </label>
            }
            .into_any();
        }
        FilterKind::RemoteSelect {
            endpoint,
            label_field,
        } => view! {
            <RemoteOptionsFilter endpoint=endpoint label_field=label_field field=field draft=draft multi=false />
        }
        .into_any(),
        FilterKind::RemoteMultiSelect {
            endpoint,
            label_field,
        } => view! {
            <RemoteOptionsFilter endpoint=endpoint label_field=label_field field=field draft=draft multi=true />
        }
        .into_any(),
        FilterKind::Custom(render) => {
            let binding = FilterBinding {
                value: Signal::derive(move || draft.with(|d| d.get(field).cloned())),
                set: Callback::new(move |value: Option<FilterValue>| {
                    draft.update(|d| match value {
                        Some(v) => {
                            d.insert(field.to_string(), v);
                        }
                        None => {
                            d.remove(field);
                        }
                    });
                }),
            };
            render.run(binding)
        }
    };

    view! {
        <label class="table-toolbar__filter">
            <span>{label}</span>
            {input}
        </label>
    }
    .into_any()
}

fn text_input(draft: Draft, field: &'static str, input_type: &'static str) -> AnyView {
    view! {
        <input
            type=input_type
            prop:value=move || draft_text(draft, field)
            on:input=move |ev| set_draft_text(draft, field, event_target_value(&ev))
        />
    }
    .into_any()
}

fn static_select(draft: Draft, field: &'static str, options: Vec<SelectOption>) -> AnyView {
    view! {
        <select
            prop:value=move || draft_text(draft, field)
            on:change=move |ev| set_draft_text(draft, field, event_target_value(&ev))
        >
            <option value="">"Все"</option>
            {options
                .into_iter()
                .map(|opt| {
                    let value = opt.value.clone();
                    let value_for_selected = opt.value.clone();
                    view! {
                        <option
                            value=value
                            selected=move || draft_text(draft, field) == value_for_selected
                        >
                            {opt.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
    .into_any()
}

/// Фильтр с опциями из другого list-эндпоинта: первая страница
/// большого размера, значение опции — `id`, подпись — `label_field`
#[component]
fn RemoteOptionsFilter(
    endpoint: &'static str,
    label_field: &'static str,
    field: &'static str,
    draft: Draft,
    multi: bool,
) -> impl IntoView {
    let (options, set_options) = signal(Vec::<SelectOption>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let url = format!("{}?start=0&length=100", endpoint);
            match api_utils::get_json::<RecordsPage<serde_json::Value>>(&url).await {
                Ok(page) => {
                    let opts = page
                        .data
                        .iter()
                        .filter_map(|row| {
                            let value = row.get("id")?.as_str()?.to_string();
                            let label = row
                                .get(label_field)
                                .and_then(|v| v.as_str())
                                .map(|s| s.to_string())
                                .unwrap_or_else(|| value.clone());
                            Some(SelectOption { value, label })
                        })
                        .collect::<Vec<_>>();
                    set_options.set(opts);
                }
                Err(e) => {
                    leptos::logging::log!("Не удалось загрузить опции фильтра {}: {}", field, e);
                }
            }
        });
    });

    let toggle_many = move |value: String, checked: bool| {
        draft.update(|d| {
            let mut current = match d.get(field) {
                Some(FilterValue::Many(values)) => values.clone(),
                _ => Vec::new(),
            };
            current.retain(|v| v != &value);
            if checked {
                current.push(value);
            }
            if current.is_empty() {
                d.remove(field);
            } else {
                d.insert(field.to_string(), FilterValue::Many(current));
            }
        });
    };

    if multi {
        view! {
            <div class="table-toolbar__multi">
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|opt| {
                            let value = opt.value.clone();
                            let value_for_change = opt.value.clone();
                            view! {
                                <label class="table-toolbar__multi-item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.with(|d| {
                                                matches!(
                                                    d.get(field),
                                                    Some(FilterValue::Many(v)) if v.contains(&value)
                                                )
                                            })
                                        }
                                        on:change=move |ev| {
                                            toggle_many(value_for_change.clone(), event_target_checked(&ev));
                                        }
                                    />
                                    {opt.label}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
        }
        .into_any()
    } else {
        view! {
            <select
                prop:value=move || draft_text(draft, field)
                on:change=move |ev| set_draft_text(draft, field, event_target_value(&ev))
            >
                <option value="">"Все"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|opt| {
                            let value = opt.value.clone();
                            let value_for_selected = opt.value.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || draft_text(draft, field) == value_for_selected
                                >
                                    {opt.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any()
    }
}
