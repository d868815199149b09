//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, record summaries and charts while reading
//! shared state from Leptos context providers.

pub mod charts;
pub mod layout;
pub mod measurement_fields;
pub mod model_metrics_grid;
pub mod model_selector;
pub mod risk_badge;
pub mod stat_card;
