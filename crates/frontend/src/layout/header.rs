use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

/// Шапка: название, текущий пользователь, выход
#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <header class="header">
            <div class="header__brand">"Медкабинет"</div>
            <div class="header__user">
                {move || {
                    auth_state.get().user_info.map(|user| {
                        view! {
                            <span class="header__user-info">
                                <span class="header__name">
                                    {user.full_name.clone().unwrap_or_else(|| user.username.clone())}
                                </span>
                                <Badge variant="neutral".to_string()>{user.role.label()}</Badge>
                            </span>
                        }
                    })
                }}
                <button class="btn btn--ghost" title="Выйти" on:click=logout>
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
