//! # memories-client — API access for the memories app
//!
//! Thin asynchronous client over the external memories API, plus the two
//! pieces of machinery the UI needs to consume it safely:
//!
//! - [`ApiClient`] — the three API operations (list names, list memories,
//!   create a memory), over `reqwest` so the same code runs natively and on
//!   `wasm32` via the browser fetch backend.
//! - [`FetchState`] — a tagged outcome type making loading, success, and
//!   failure all representable UI states; a failed read is never an
//!   unobserved rejection.
//! - [`RequestGeneration`] — a per-consumer monotonic guard so a stale
//!   response that completes out of order can never overwrite a newer one.

pub mod client;
pub mod error;
pub mod state;

pub use client::ApiClient;
pub use error::ApiError;
pub use state::{FetchState, RequestGeneration, RequestToken};
