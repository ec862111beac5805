use crate::shared::icons::icon;
use leptos::prelude::*;

/// Small aggregate card shown above list pages (asset counts, leave tallies).
/// `None` renders as a dash: stats come from a background fetch and may be
/// missing without failing the page.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Value to display (None = not loaded)
    #[prop(into)]
    value: Signal<Option<u32>>,
    /// Visual accent: "success", "warning", "error" or default
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let card_class = move || match accent.get().as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
