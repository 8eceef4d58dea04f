//! `wicket-core` — shared domain foundation.
//!
//! This crate contains **pure domain** primitives (no HTTP or storage concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
