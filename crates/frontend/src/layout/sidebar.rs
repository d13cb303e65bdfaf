use leptos::prelude::*;

use super::Section;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Боковое меню; пункты фильтруются по роли текущего пользователя
#[component]
pub fn Sidebar(section: RwSignal<Section>) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <nav class="sidebar">
            {move || {
                let role = auth_state.get().role();
                Section::ALL
                    .iter()
                    .filter(|s| role.is_some_and(|r| s.allows(r)))
                    .map(|s| {
                        let s = *s;
                        view! {
                            <button
                                class=move || {
                                    if section.get() == s {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| section.set(s)
                            >
                                {icon(s.icon())}
                                <span>{s.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
