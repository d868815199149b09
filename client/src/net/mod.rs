//! Networking modules for the external risk API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every REST call in a typed async function. Paths and payload
//! types come from the shared `assessments::api` contract.

pub mod api;
