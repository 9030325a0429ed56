//! Error handling for curve arithmetic

use std::borrow::Cow;
use std::fmt;

use toycurve_api::{Error as CoreError, Result as CoreResult};

/// The error type for curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// `value` has no multiplicative inverse modulo `modulus`
    NoInverseExists {
        /// Operand, already reduced into `[0, modulus)`
        value: i64,
        /// Modulus the inverse was requested for
        modulus: i64,
    },

    /// No curve point has an x-coordinate in the message's slot range
    EncodingNotFound {
        /// The message being encoded
        message: i64,
        /// First x-coordinate tried, `m·h mod p`
        first_x: i64,
        /// Number of x-coordinates tried, `h`
        slots: i64,
    },

    /// The curve has too few points for the requested operation
    DegenerateCurve {
        /// What was missing
        reason: &'static str,
    },

    /// An externally supplied point does not satisfy the curve equation
    PointNotOnCurve {
        /// x-coordinate, reduced modulo p
        x: i64,
        /// y-coordinate, reduced modulo p
        y: i64,
    },
}

// Add convenience helper
impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::NoInverseExists { value, modulus } => {
                write!(f, "No inverse exists for {} mod {}", value, modulus)
            },
            Error::EncodingNotFound { message, first_x, slots } => {
                write!(f, "No curve point encodes message {} (tried {} x-coordinates starting at {})",
                    message, slots, first_x)
            },
            Error::DegenerateCurve { reason } => {
                write!(f, "Degenerate curve: {}", reason)
            },
            Error::PointNotOnCurve { x, y } => {
                write!(f, "Point ({},{}) is not on the curve", x, y)
            },
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Parameter { .. } | Error::PointNotOnCurve { .. } => CoreError::InvalidParameter {
                context: "curve arithmetic",
                message,
            },
            Error::NoInverseExists { .. } => CoreError::ArithmeticFailure {
                context: "modular inverse",
                message,
            },
            Error::EncodingNotFound { .. } => CoreError::EncodingFailed {
                context: "message encoding",
                message,
            },
            Error::DegenerateCurve { .. } => CoreError::InvalidParameter {
                context: "curve enumeration",
                message,
            },
        }
    }
}

/// Convert an arithmetic result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use toycurve_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
