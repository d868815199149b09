//! Selected prediction model, persisted across reloads.

#[cfg(test)]
#[path = "model_mode_test.rs"]
mod model_mode_test;

use assessments::ModelKey;

use crate::util::storage;

pub const MODEL_STORAGE_KEY: &str = "mlModel";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelModeState {
    pub model: ModelKey,
}

impl ModelModeState {
    /// Parse a stored key, falling back to the default model.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        let model = raw.and_then(|s| s.parse().ok()).unwrap_or_default();
        Self { model }
    }

    /// Restore the model saved in local storage.
    #[must_use]
    pub fn load() -> Self {
        Self::from_stored(storage::load_string(MODEL_STORAGE_KEY).as_deref())
    }

    pub fn select(&mut self, model: ModelKey) {
        self.model = model;
        storage::save_string(MODEL_STORAGE_KEY, model.as_str());
    }
}
