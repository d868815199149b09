//! Shared assessment model and REST contract for DiabetesPredict.
//!
//! This crate owns the types exchanged with the external risk API and the
//! pure logic both front-ends need: form validation, CSV import, and the
//! aggregations behind the dashboard charts. It performs no I/O, so the
//! browser client and the CLI share exactly the same rules.

pub mod api;
pub mod csv;
pub mod model;
pub mod record;
pub mod risk;
pub mod stats;
pub mod validation;

pub use api::{ApiError, AuthResponse, ErrorBody, Session, SessionUser};
pub use model::{ModelKey, ModelMetrics};
pub use record::{Assessment, Measurements, Prediction};
pub use risk::RiskLevel;
pub use validation::{FieldError, MeasurementDraft};
