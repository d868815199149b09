//! Coloured risk label with optional percentage.

#[cfg(test)]
#[path = "risk_badge_test.rs"]
mod risk_badge_test;

use assessments::{Prediction, RiskLevel};
use leptos::prelude::*;

/// `45.3%` style label.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Badge text for an optional prediction.
#[must_use]
pub fn badge_text(prediction: Option<Prediction>) -> String {
    match prediction {
        Some(p) => format!("{} ({})", p.level.legend(), format_percentage(p.percentage)),
        None => "Not available".to_owned(),
    }
}

#[component]
pub fn RiskBadge(#[prop(into)] prediction: Signal<Option<Prediction>>) -> impl IntoView {
    let class = move || {
        prediction
            .get()
            .map_or("risk-badge risk-badge--none", |p| p.level.badge_class())
    };
    view! { <span class=class>{move || badge_text(prediction.get())}</span> }
}
