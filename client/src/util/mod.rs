//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage, session persistence, timers and dashboard maths live
//! here so pages and components stay focused on rendering.

pub mod analytics;
pub mod auth;
pub mod delay;
pub mod session;
pub mod storage;
