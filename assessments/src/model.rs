//! Selectable prediction models and their precomputed evaluation metrics.
//!
//! The API scores every record with all models at once; the UI only chooses
//! which model's output to display. Metrics come from the offline evaluation
//! run and never change at runtime.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prediction model selectable in the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKey {
    #[default]
    Xgboost,
    Randomforest,
    Logisticregression,
    Svc,
    Knn,
    Mlp,
}

/// Evaluation metrics for one model, all in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub f1: f64,
    pub recall: f64,
    pub roc_auc: f64,
}

impl ModelKey {
    /// Every model, in selector display order.
    pub const ALL: [Self; 6] = [
        Self::Xgboost,
        Self::Randomforest,
        Self::Logisticregression,
        Self::Svc,
        Self::Knn,
        Self::Mlp,
    ];

    /// Stable key used in storage and in the `outcome_<key>` wire fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xgboost => "xgboost",
            Self::Randomforest => "randomforest",
            Self::Logisticregression => "logisticregression",
            Self::Svc => "svc",
            Self::Knn => "knn",
            Self::Mlp => "mlp",
        }
    }

    /// Human-readable model name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Xgboost => "XGBoost",
            Self::Randomforest => "Random Forest",
            Self::Logisticregression => "Logistic Regression",
            Self::Svc => "Support Vector Classification (SVC)",
            Self::Knn => "K-Nearest Neighbors",
            Self::Mlp => "Multilayer Perceptron (MLP)",
        }
    }

    /// Precomputed evaluation metrics for this model.
    #[must_use]
    pub fn metrics(self) -> ModelMetrics {
        let (accuracy, f1, recall, roc_auc) = match self {
            Self::Logisticregression => (73.4, 66.1, 74.1, 82.8),
            Self::Randomforest => (88.3, 83.6, 85.2, 94.9),
            Self::Svc => (83.1, 77.6, 83.3, 88.3),
            Self::Knn => (75.3, 69.4, 79.6, 84.5),
            Self::Mlp => (84.4, 78.2, 79.6, 88.2),
            Self::Xgboost => (90.9, 87.3, 88.9, 95.9),
        };
        ModelMetrics { accuracy, f1, recall, roc_auc }
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized model key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelKey {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or(UnknownModel(s.to_owned()))
    }
}
