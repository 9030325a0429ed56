//! Public API traits and types for the toycurve workspace
//!
//! This crate provides the public API surface shared by the arithmetic and
//! protocol crates: the crate-agnostic error type and the trait definitions
//! for key agreement and point encryption.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{KeyAgreement, PointEncryption};

// Re-export trait modules for direct access
pub use traits::{agreement, encryption};
