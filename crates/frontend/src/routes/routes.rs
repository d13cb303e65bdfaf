use leptos::prelude::*;

use crate::domain::appointments::AppointmentsPage;
use crate::domain::medical_records::MedicalRecordsPage;
use crate::layout::{Header, Section, Sidebar};
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::users::UsersPage;

#[component]
fn MainLayout() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let initial_section = auth_state
        .get_untracked()
        .role()
        .map(Section::default_for)
        .unwrap_or(Section::MedicalRecords);
    let section = RwSignal::new(initial_section);

    view! {
        <div class="shell">
            <Header />
            <div class="shell__body">
                <Sidebar section=section />
                <main class="shell__content">
                    {move || match section.get() {
                        Section::Users => view! { <UsersPage /> }.into_any(),
                        Section::Appointments => view! { <AppointmentsPage /> }.into_any(),
                        Section::MedicalRecords => view! { <MedicalRecordsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
