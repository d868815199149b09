//! Dropdown switching the model whose predictions are shown.

use assessments::ModelKey;
use leptos::prelude::*;

use crate::state::model_mode::ModelModeState;

#[component]
pub fn ModelSelector() -> impl IntoView {
    let model_mode = expect_context::<RwSignal<ModelModeState>>();

    let on_change = move |ev: leptos::ev::Event| {
        if let Ok(model) = event_target_value(&ev).parse::<ModelKey>() {
            model_mode.update(|m| m.select(model));
        }
    };

    view! {
        <label class="model-selector">
            <span class="model-selector__label">"Prediction model"</span>
            <select class="model-selector__select" on:change=on_change>
                {ModelKey::ALL
                    .into_iter()
                    .map(|model| {
                        view! {
                            <option
                                value=model.as_str()
                                selected=move || model_mode.get().model == model
                            >
                                {model.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
