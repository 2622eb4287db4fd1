//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during key generation, signing, and verification
#[derive(Debug, Clone)]
pub enum Error {
    /// Seed or key length does not match the parameter set
    InvalidKeySize { expected: usize, actual: usize },

    /// Signature blob has the wrong size
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Derived matrix shape disagrees with the parameter set.
    /// Indicates a build/configuration defect, not bad input.
    DimensionMismatch {
        context: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Invalid parameter
    InvalidParameter(String),

    /// Key generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Encoding error
    Serialization(String),

    /// Decoding error
    Deserialization(String),

    /// RNG error: the entropy source failed. Fatal, never retried.
    Rng(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize { expected, actual } => {
                write!(f, "Invalid key size: expected {}, got {}", expected, actual)
            }
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::DimensionMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: dimension mismatch (expected {}x{}, got {}x{})",
                    context, expected.0, expected.1, actual.0, actual.1
                )
            }
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "{} key generation failed: {}", algorithm, details)
            }
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Rng(msg) => write!(f, "RNG error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Convert to api::Error
impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeySize { expected, actual } => api::Error::InvalidKey {
                context: "sign",
                message: format!("Invalid key size: expected {}, got {}", expected, actual),
            },
            Error::InvalidSignatureSize { expected, actual } => api::Error::InvalidSignature {
                context: "sign",
                message: format!(
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                ),
            },
            Error::DimensionMismatch {
                context,
                expected,
                actual,
            } => api::Error::InvalidParameter {
                context,
                message: format!(
                    "dimension mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                ),
            },
            Error::InvalidParameter(msg) => api::Error::InvalidParameter {
                context: "sign",
                message: msg,
            },
            // Key generation failures produce invalid keys
            Error::KeyGeneration { algorithm, details } => api::Error::InvalidKey {
                context: algorithm,
                message: format!("Key generation failed: {}", details),
            },
            Error::SignatureGeneration { algorithm, details } => api::Error::InvalidSignature {
                context: algorithm,
                message: format!("Signature generation failed: {}", details),
            },
            Error::Serialization(s) => api::Error::SerializationError {
                context: "serialization",
                message: s,
            },
            Error::Deserialization(s) => api::Error::SerializationError {
                context: "deserialization",
                message: s,
            },
            Error::Rng(s) => api::Error::RandomGenerationError {
                context: "sign",
                message: s,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
