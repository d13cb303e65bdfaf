use contracts::domain::medical_records::{MedicalRecord, RecordType};
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::shared::components::ui::Badge;
use crate::shared::datatable::{
    CellContext, Column, DataRow, DataTable, FilterDef, FilterKind, SelectOption,
};
use crate::shared::date_utils::format_date;
use crate::system::auth::guard::RequireRole;

impl DataRow for MedicalRecord {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "recorded_at" => Some(self.recorded_at.clone()),
            "title" => Some(self.title.clone()),
            "record_type" => Some(self.record_type.label().to_string()),
            "doctor_name" => Some(self.doctor_name.clone()),
            "patient_name" => Some(self.patient_name.clone()),
            _ => None,
        }
    }
}

/// Медкарта; просмотр для врача и пациента. Массовых операций нет,
/// поэтому таблица рендерится без колонки чекбоксов.
#[component]
pub fn MedicalRecordsPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Doctor, Role::Patient]>
            <MedicalRecordsTable />
        </RequireRole>
    }
}

fn columns() -> Vec<Column<MedicalRecord>> {
    let date_cell = Callback::new(|ctx: CellContext<MedicalRecord>| {
        view! { <span>{format_date(&ctx.row.recorded_at)}</span> }.into_any()
    });

    let type_cell = Callback::new(|ctx: CellContext<MedicalRecord>| {
        let variant = match ctx.row.record_type {
            RecordType::Consultation => "primary",
            RecordType::Diagnosis => "warning",
            RecordType::Prescription => "success",
            RecordType::LabResult => "neutral",
        };
        view! {
            <Badge variant=variant.to_string()>{ctx.row.record_type.label()}</Badge>
        }
        .into_any()
    });

    vec![
        Column::custom("recorded_at", "Дата", true, date_cell).width("120px"),
        Column::text("title", "Заголовок", true),
        Column::custom("record_type", "Тип записи", false, type_cell).width("140px"),
        Column::text("doctor_name", "Врач", false),
        Column::text("patient_name", "Пациент", false),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::new("search", "Поиск", FilterKind::Text),
        FilterDef::new("date", "Дата", FilterKind::Date),
        FilterDef::new(
            "record_type",
            "Тип записи",
            FilterKind::Select(vec![
                SelectOption::new("consultation", RecordType::Consultation.label()),
                SelectOption::new("diagnosis", RecordType::Diagnosis.label()),
                SelectOption::new("prescription", RecordType::Prescription.label()),
                SelectOption::new("lab_result", RecordType::LabResult.label()),
            ]),
        ),
    ]
}

#[component]
fn MedicalRecordsTable() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"Медкарта"</h2>
            <DataTable
                endpoint="/api/medical-records/list"
                columns=columns()
                filters=filters()
            />
        </div>
    }
}
