use super::*;

#[test]
fn default_model_is_xgboost() {
    assert_eq!(ModelModeState::default().model, ModelKey::Xgboost);
}

#[test]
fn stored_key_round_trips() {
    for model in ModelKey::ALL {
        assert_eq!(ModelModeState::from_stored(Some(model.as_str())).model, model);
    }
}

#[test]
fn unknown_or_missing_key_falls_back_to_default() {
    assert_eq!(ModelModeState::from_stored(Some("perceptron")).model, ModelKey::Xgboost);
    assert_eq!(ModelModeState::from_stored(None).model, ModelKey::Xgboost);
}

#[test]
fn select_updates_model() {
    let mut state = ModelModeState::default();
    state.select(ModelKey::Knn);
    assert_eq!(state.model, ModelKey::Knn);
}
