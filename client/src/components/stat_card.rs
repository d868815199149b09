//! Headline number card on the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {subtitle.map(|s| view! { <span class="stat-card__subtitle">{s}</span> })}
        </div>
    }
}
