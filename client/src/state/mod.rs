//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each of these in an `RwSignal` and provides it to the tree.
//! The structs stay plain data so their transitions are unit-testable without
//! a reactive runtime.

pub mod auth;
pub mod data;
pub mod model_mode;
