use contracts::system::auth::Role;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::ui::Badge;
use crate::shared::datatable::{
    BulkAction, BulkContext, CellContext, Column, DataRow, DataTable, FilterDef, FilterKind,
    SelectOption,
};
use crate::shared::date_utils::format_datetime;
use crate::system::auth::guard::RequireRole;

/// Блокировка/разблокировка выполняется пачками не больше этого размера
const MAX_BLOCK_BATCH: usize = 20;

impl DataRow for User {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "username" => Some(self.username.clone()),
            "full_name" => self.full_name.clone(),
            "email" => self.email.clone(),
            "role" => Some(self.role.label().to_string()),
            "is_blocked" => Some(
                if self.is_blocked {
                    "Заблокирован"
                } else {
                    "Активен"
                }
                .to_string(),
            ),
            "created_at" => Some(self.created_at.clone()),
            "last_login_at" => self.last_login_at.clone(),
            _ => None,
        }
    }
}

/// Администрирование пользователей; только для роли admin
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Admin]>
            <UsersTable />
        </RequireRole>
    }
}

fn columns() -> Vec<Column<User>> {
    let role_cell = Callback::new(|ctx: CellContext<User>| {
        let variant = match ctx.row.role {
            Role::Admin => "primary",
            Role::Doctor => "success",
            Role::Patient => "neutral",
        };
        view! { <Badge variant=variant.to_string()>{ctx.row.role.label()}</Badge> }.into_any()
    });

    let status_cell = Callback::new(|ctx: CellContext<User>| {
        if ctx.row.is_blocked {
            view! { <Badge variant="error".to_string()>"Заблокирован"</Badge> }.into_any()
        } else {
            view! { <Badge variant="success".to_string()>"Активен"</Badge> }.into_any()
        }
    });

    let created_cell = Callback::new(|ctx: CellContext<User>| {
        view! { <span>{format_datetime(&ctx.row.created_at)}</span> }.into_any()
    });

    let last_login_cell = Callback::new(|ctx: CellContext<User>| {
        let text = ctx
            .row
            .last_login_at
            .as_deref()
            .map(format_datetime)
            .unwrap_or_default();
        view! { <span>{text}</span> }.into_any()
    });

    vec![
        Column::text("username", "Логин", true),
        Column::text("full_name", "ФИО", true),
        Column::text("email", "Email", true),
        Column::custom("role", "Роль", false, role_cell).width("120px"),
        Column::custom("is_blocked", "Статус", false, status_cell).width("140px"),
        Column::custom("created_at", "Создан", true, created_cell).width("160px"),
        Column::custom("last_login_at", "Последний вход", false, last_login_cell).width("160px"),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::new("search", "Поиск", FilterKind::Text),
        FilterDef::new(
            "role",
            "Роль",
            FilterKind::Select(vec![
                SelectOption::new("admin", Role::Admin.label()),
                SelectOption::new("doctor", Role::Doctor.label()),
                SelectOption::new("patient", Role::Patient.label()),
            ]),
        ),
        FilterDef::new("only_blocked", "Только заблокированные", FilterKind::Checkbox),
    ]
}

fn bulk_actions() -> Vec<BulkAction<User>> {
    let batch_limit = Callback::new(|rows: Vec<User>| rows.len() > MAX_BLOCK_BATCH);

    let block = Callback::new(|ctx: BulkContext<User>| {
        run_mutation(ctx, |ids| async move { api::set_blocked(ids, true).await })
    });
    let unblock = Callback::new(|ctx: BulkContext<User>| {
        run_mutation(ctx, |ids| async move { api::set_blocked(ids, false).await })
    });
    let delete = Callback::new(|ctx: BulkContext<User>| {
        run_mutation(ctx, |ids| async move { api::delete_users(ids).await })
    });

    vec![
        BulkAction::new("Заблокировать", "ban", block).disabled_when(batch_limit),
        BulkAction::new("Разблокировать", "unlock", unblock).disabled_when(batch_limit),
        BulkAction::new("Удалить", "trash", delete),
    ]
}

fn run_mutation<F, Fut>(ctx: BulkContext<User>, mutate: F)
where
    F: FnOnce(Vec<String>) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<(), String>> + 'static,
{
    let ids: Vec<String> = ctx.rows.iter().map(|row| row.id.clone()).collect();
    let refresh = ctx.refresh;
    spawn_local(async move {
        if let Err(e) = mutate(ids).await {
            leptos::logging::log!("Массовая операция не выполнена: {}", e);
        }
        refresh.run(());
    });
}

#[component]
fn UsersTable() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"Пользователи"</h2>
            <DataTable
                endpoint="/api/system/users/list"
                columns=columns()
                filters=filters()
                bulk_actions=bulk_actions()
            />
        </div>
    }
}
