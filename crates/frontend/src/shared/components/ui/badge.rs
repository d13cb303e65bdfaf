use leptos::prelude::*;

/// Цветной бейдж для ролей и статусов
#[component]
pub fn Badge(
    /// Вариант: "primary", "success", "warning", "error", "neutral" (по умолчанию)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Содержимое бейджа
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
