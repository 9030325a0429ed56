//! Errors raised while loading or checking scenario vectors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{vector}: exchange failed: {source}")]
    Exchange {
        vector: String,
        #[source]
        source: toycurve_pke::Error,
    },

    #[error("{vector}: expected failure containing {expected:?}, exchange succeeded")]
    UnexpectedSuccess { vector: String, expected: String },

    #[error("{vector}: {field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        vector: String,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;
