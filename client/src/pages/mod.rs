//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod edit_record;
pub mod login;
pub mod record_result;
pub mod review_records;
pub mod signup;
pub mod update_data;
pub mod verification_pending;
pub mod verify_email;
