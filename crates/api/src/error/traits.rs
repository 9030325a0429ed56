//! Context helpers for results crossing into the API error type

use super::types::{Error, Result};

/// Converts a crate-local error into [`Error`] while relabelling it
pub trait ResultExt<T> {
    /// Convert the error and replace its context
    fn with_context(self, context: &'static str) -> Result<T>;

    /// Convert the error and replace its message
    fn with_message(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| {
            let err: Error = e.into();
            err.with_context(context)
        })
    }

    fn with_message(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: Error = e.into();
            err.with_message(message)
        })
    }
}
