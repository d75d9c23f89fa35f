//! Core shared types for the AI system runtime crates.

#![warn(missing_docs, clippy::pedantic)]

mod error;

/// Application error, its result alias and the coded-error trait.
pub use error::{Error, ErrorCode, Result};
