//! # memories-web — the memories single-page app
//!
//! A client-side rendered Yew application over the external memories API.
//! All persistence and business logic live behind the API; this crate is a
//! presentation and state-synchronization layer:
//!
//! - `hooks` — the hash-router hook and the data-fetching hooks
//! - `components` — `NameList`, `MemoryList`, `NewMemory`
//! - `app` — the composition root mapping routes to views

mod app;
mod components;
mod hooks;

use app::App;

fn main() {
    // Readable panics and tracing output on the browser console.
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
