use contracts::system::auth::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// Пускает внутрь только пользователей с одной из перечисленных ролей
#[component]
pub fn RequireRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let roles = StoredValue::new(roles);

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                state.access_token.is_some()
                    && state.role().is_some_and(|role| roles.with_value(|r| r.contains(&role)))
            }
            fallback=|| view! { <div class="access-denied">"Недостаточно прав для просмотра раздела."</div> }
        >
            {children()}
        </Show>
    }
}
