//! Evaluation metrics of the selected model.

#[cfg(test)]
#[path = "model_metrics_grid_test.rs"]
mod model_metrics_grid_test;

use assessments::ModelKey;
use leptos::prelude::*;

use crate::components::risk_badge::format_percentage;
use crate::state::model_mode::ModelModeState;

/// Label and formatted value for each metric card.
#[must_use]
pub fn metric_cells(model: ModelKey) -> [(&'static str, String); 4] {
    let m = model.metrics();
    [
        ("Accuracy", format_percentage(m.accuracy)),
        ("F1 Score", format_percentage(m.f1)),
        ("Recall", format_percentage(m.recall)),
        ("ROC AUC", format_percentage(m.roc_auc)),
    ]
}

#[component]
pub fn ModelMetricsGrid() -> impl IntoView {
    let model_mode = expect_context::<RwSignal<ModelModeState>>();

    view! {
        <div class="metrics-grid">
            <h3 class="metrics-grid__title">{move || format!("{} performance", model_mode.get().model.label())}</h3>
            {move || {
                metric_cells(model_mode.get().model)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="metrics-grid__cell">
                                <span class="metrics-grid__label">{label}</span>
                                <span class="metrics-grid__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
