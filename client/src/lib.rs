//! # client
//!
//! Leptos + WASM frontend for the hackathon helper: project evaluation,
//! idea generation and a kanban dashboard, all backed by an external REST
//! API reached through the host's `/api` proxy.
//!
//! This crate contains pages, components, application state, REST types and
//! helpers. The host binary renders it with the `ssr` feature; the browser
//! bundle is built with `hydrate` and enters through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hackhelper client hydrating");
    leptos::mount::hydrate_body(app::App);
}
