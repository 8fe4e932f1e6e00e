//! # Memories Core Library
//!
//! Target-agnostic domain layer for the memories app: a small client for
//! recording and browsing dated notes about named people.
//!
//! Everything here is pure data and pure functions; the backend owns
//! persistence and the [`Memory`] age fields, and the UI layer owns all I/O.
//! This crate compiles identically on the host and on `wasm32`:
//!
//! - [`types`] — wire-compatible records ([`Name`], [`Memory`], [`NewMemory`])
//! - [`age`] — bucketing memories into runs of equal `(years, months)` and
//!   rendering the human age label
//! - [`route`] — the URL-fragment route table driving view selection
//! - [`validate`] — form-input validation for new memories

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod age;
pub mod error;
pub mod route;
pub mod types;
pub mod validate;

pub use age::{group_by_age, AgeGroup};
pub use error::MemoriesError;
pub use route::Route;
pub use types::{Age, Memory, MemoryId, Name, NewMemory};
