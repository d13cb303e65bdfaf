use contracts::domain::appointments::{Appointment, AppointmentStatus};
use contracts::system::auth::Role;
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

impl DataRow for Appointment {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "scheduled_at" => Some(self.scheduled_at.clone()),
            "patient_name" => Some(self.patient_name.clone()),
            "doctor_name" => Some(self.doctor_name.clone()),
            "status" => Some(self.status.label().to_string()),
            "reason" => self.reason.clone(),
            _ => None,
        }
    }
}

/// Журнал приёмов; доступен администратору и врачу
#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Admin, Role::Doctor]>
            <AppointmentsTable />
        </RequireRole>
    }
}

fn status_variant(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "warning",
        AppointmentStatus::Confirmed => "primary",
        AppointmentStatus::Completed => "success",
        AppointmentStatus::Cancelled => "error",
    }
}

fn columns() -> Vec<Column<Appointment>> {
    let scheduled_cell = Callback::new(|ctx: CellContext<Appointment>| {
        view! { <span>{format_datetime(&ctx.row.scheduled_at)}</span> }.into_any()
    });

    let status_cell = Callback::new(|ctx: CellContext<Appointment>| {
        let status = ctx.row.status;
        view! {
            <Badge variant=status_variant(status).to_string()>{status.label()}</Badge>
        }
        .into_any()
    });

    vec![
        Column::custom("scheduled_at", "Дата/время", true, scheduled_cell).width("160px"),
        Column::text("patient_name", "Пациент", true),
        Column::text("doctor_name", "Врач", true),
        Column::custom("status", "Статус", false, status_cell).width("190px"),
        Column::text("reason", "Причина", false),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::new("date_from", "С даты", FilterKind::Date),
        FilterDef::new("date_to", "По дату", FilterKind::Date),
        FilterDef::new(
            "status",
            "Статус",
            FilterKind::Select(vec![
                SelectOption::new("pending", AppointmentStatus::Pending.label()),
                SelectOption::new("confirmed", AppointmentStatus::Confirmed.label()),
                SelectOption::new("completed", AppointmentStatus::Completed.label()),
                SelectOption::new("cancelled", AppointmentStatus::Cancelled.label()),
            ]),
        ),
        FilterDef::new("patient", "Пациент", FilterKind::Text),
        FilterDef::new(
            "doctor",
            "Врач",
            FilterKind::RemoteSelect {
                endpoint: "/api/system/users/list",
                label_field: "full_name",
            },
        ),
    ]
}

fn bulk_actions() -> Vec<BulkAction<Appointment>> {
    // подтверждать можно только приёмы в ожидании
    let not_all_pending = Callback::new(|rows: Vec<Appointment>| {
        !rows
            .iter()
            .all(|row| row.status == AppointmentStatus::Pending)
    });

    let confirm = Callback::new(|ctx: BulkContext<Appointment>| {
        run_mutation(ctx, |ids| async move { api::confirm(ids).await })
    });
    let cancel = Callback::new(|ctx: BulkContext<Appointment>| {
        run_mutation(ctx, |ids| async move { api::cancel(ids).await })
    });

    vec![
        BulkAction::new("Подтвердить", "check", confirm).disabled_when(not_all_pending),
        BulkAction::new("Отменить", "x", cancel),
    ]
}

fn run_mutation<F, Fut>(ctx: BulkContext<Appointment>, mutate: F)
where
    F: FnOnce(Vec<String>) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<(), String>> + 'static,
{
    let ids: Vec<String> = ctx.rows.iter().map(|row| row.id.clone()).collect();
    let refresh = ctx.refresh;
    spawn_local(async move {
        if let Err(e) = mutate(ids).await {
            leptos::logging::log!("Операция над приёмами не выполнена: {}", e);
        }
        refresh.run(());
    });
}

#[component]
fn AppointmentsTable() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"Приёмы"</h2>
            <DataTable
                endpoint="/api/appointments/list"
                columns=columns()
                filters=filters()
                bulk_actions=bulk_actions()
            />
        </div>
    }
}
