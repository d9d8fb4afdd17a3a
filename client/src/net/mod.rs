//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls through the host's `/api` proxy and `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
