//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, navigation, cache
//! handoff) and delegates rendering details to `components`.

pub mod dashboard;
pub mod evaluate;
pub mod evaluate_results;
pub mod home;
pub mod ideas;
pub mod login;
pub mod questionnaire;
pub mod signup;
