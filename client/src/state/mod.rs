//! Shared client state modules.
//!
//! DESIGN
//! ======
//! State structs stay plain data; `App` and the pages wrap them in
//! `RwSignal`s. Keeping mutation logic here lets it be unit-tested without
//! a reactive runtime.

pub mod auth;
pub mod dashboard;
pub mod results;
