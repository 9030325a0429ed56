//! Error type definitions for curve operations and protocols

/// Primary error type for the public API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error (bad modulus, negative scalar, off-curve point)
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Modular arithmetic could not complete (no inverse for an operand)
    ArithmeticFailure {
        context: &'static str,
        message: String,
    },

    /// A message could not be embedded as a curve point
    EncodingFailed {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// A protocol invariant did not hold (e.g. the parties disagree)
    ProtocolFailure {
        context: &'static str,
        message: String,
    },
}

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::ArithmeticFailure { message, .. } => Self::ArithmeticFailure { context, message },
            Self::EncodingFailed { message, .. } => Self::EncodingFailed { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::ProtocolFailure { message, .. } => Self::ProtocolFailure { context, message },
        }
    }

    /// Replace the message of an existing error, keeping its context
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::ArithmeticFailure { context, .. } => Self::ArithmeticFailure { context, message },
            Self::EncodingFailed { context, .. } => Self::EncodingFailed { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::ProtocolFailure { context, .. } => Self::ProtocolFailure { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::ArithmeticFailure { context, .. }
            | Self::EncodingFailed { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::ProtocolFailure { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            Self::ArithmeticFailure { context, message } => {
                write!(f, "Arithmetic failure: {}: {}", context, message)
            },
            Self::EncodingFailed { context, message } => {
                write!(f, "Encoding failed: {}: {}", context, message)
            },
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            },
            Self::ProtocolFailure { context, message } => {
                write!(f, "Protocol failure: {}: {}", context, message)
            },
        }
    }
}
