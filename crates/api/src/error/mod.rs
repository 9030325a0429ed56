//! Error handling for the toycurve ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl std::error::Error for Error {}

// Specialized result types for different operations
pub type AgreementResult<T> = Result<T>;
pub type EncryptionResult<T> = Result<T>;
