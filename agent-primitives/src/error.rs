//! Shared error definitions for the runtime crates.

use std::error::Error as StdError;

use thiserror::Error;

/// Result alias used throughout the runtime.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that expose a stable, machine-readable code.
///
/// Subsystem errors implement this trait so they can be lifted into the
/// application-level [`Error`] with `?` while keeping their tag.
pub trait ErrorCode: StdError + Send + Sync + 'static {
    /// Returns the fixed code identifying this error family.
    fn code(&self) -> &'static str;
}

/// Application-level error wrapping a coded subsystem error.
#[derive(Debug, Error)]
#[error("[{code}] {source}")]
pub struct Error {
    code: &'static str,
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl Error {
    /// Returns the code carried by the wrapped error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Returns true when the wrapped error is of type `E`.
    #[must_use]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.source.is::<E>()
    }

    /// Borrows the wrapped error as `E`, if it has that type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
}

impl<E: ErrorCode> From<E> for Error {
    fn from(value: E) -> Self {
        Self {
            code: value.code(),
            source: Box::new(value),
        }
    }
}
