use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::controller::TableController;
use super::types::{BulkAction, BulkContext, DataRow};
use crate::shared::icons::icon;

/// Панель массовых операций; видна только при непустом выборе
#[component]
pub fn BulkActionBar<T>(
    controller: TableController<T>,
    actions: Vec<BulkAction<T>>,
    refresh: Callback<()>,
) -> impl IntoView
where
    T: DataRow + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let state = controller.state();
    let actions = StoredValue::new(actions);

    view! {
        <Show when=move || state.with(|s| !s.selected_rows.is_empty())>
            <div class="bulk-bar">
                <span class="bulk-bar__count">
                    {move || format!("Выбрано: {}", state.with(|s| s.selected_rows.len()))}
                </span>
                {move || {
                    actions.with_value(|list| {
                        list.iter()
                            .map(|action| {
                                let label = action.label;
                                let icon_name = action.icon;
                                let run = action.action;
                                let action = action.clone();
                                view! {
                                    <button
                                        class="btn bulk-bar__action"
                                        disabled=move || {
                                            state.with(|s| action.is_disabled(&s.selected_rows))
                                        }
                                        on:click=move |_| {
                                            let rows = state.with_untracked(|s| s.selected_rows.clone());
                                            run.run(BulkContext { rows, refresh });
                                        }
                                    >
                                        {icon(icon_name)}
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </Show>
    }
}
