//! Error types for tutor-core.
//!
//! One enum covers the key exchange, the stream cipher and the text
//! parsing entry points. The presentation layer turns these into user
//! messages; the `Display` text here is diagnostic, not UI copy.
//!
//! ## Stability
//! `TutorError::code()` values are the machine-readable kinds a host
//! matches on. They are listed in [`ERROR_CODES`] and must not change.

use num_bigint::{BigInt, BigUint};

/// Unified error type for all tutor-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TutorError {
    /// Private key outside `[1, modulus)`.
    #[error("Private key {key} out of range: must satisfy 1 <= key < {modulus}")]
    InvalidKeyRange { key: BigInt, modulus: BigUint },

    /// The two independently derived secrets disagree. Internal fault.
    #[error("Key mismatch: Bob derived {bob}, Alice derived {alice}")]
    KeyMismatch { bob: BigUint, alice: BigUint },

    /// Text where an integer was required does not parse as one.
    #[error("Non-numeric input: {0:?}")]
    NonNumericInput(String),

    /// Cipher invoked with zero-length key material.
    #[error("Empty key: cipher key material must not be empty")]
    EmptyKey,

    /// Ciphertext report text is not space-separated hex octets.
    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    /// Rejected public parameters (zero generator, modulus below 2).
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

impl TutorError {
    /// Stable machine-readable kind for this error.
    pub fn code(&self) -> &'static str {
        match self {
            TutorError::InvalidKeyRange { .. } => "INVALID_KEY_RANGE",
            TutorError::KeyMismatch { .. } => "KEY_MISMATCH",
            TutorError::NonNumericInput(_) => "NON_NUMERIC_INPUT",
            TutorError::EmptyKey => "EMPTY_KEY",
            TutorError::MalformedHex(_) => "MALFORMED_HEX",
            TutorError::InvalidParameters(_) => "INVALID_PARAMETERS",
        }
    }

    /// `true` for faults that indicate a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, TutorError::KeyMismatch { .. })
    }
}

/// Canonical registry of error kinds returned by [`TutorError::code`].
pub const ERROR_CODES: [&str; 6] = [
    "INVALID_KEY_RANGE",
    "KEY_MISMATCH",
    "NON_NUMERIC_INPUT",
    "EMPTY_KEY",
    "MALFORMED_HEX",
    "INVALID_PARAMETERS",
];

/// Returns `true` if `code` is one of [`ERROR_CODES`].
pub fn is_known_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}

/// Result alias for tutor-core operations.
pub type Result<T> = std::result::Result<T, TutorError>;
