//! Tutor Core: classroom Diffie-Hellman and a toy stream cipher.
//!
//! Pure, synchronous functions behind an interactive front end. The front
//! end collects text, calls in here, and renders the returned values. No
//! state is shared between calls and no call performs IO.
//!
//! NOT cryptographically secure: the shipped modulus is 13 and the cipher
//! is repeating-key XOR.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Shipped parameter values and demo inputs |
//! | [`errors`] | `TutorError` and its stable codes |
//! | [`params`] | `DhParameters` configuration value |
//! | [`key_exchange`] | Public keys, shared secret, two-party negotiation |
//! | [`cipher`] | Repeating-key XOR keyed by a shared secret |
//! | [`encoding`] | Hex report and base64 |
//! | [`demo`] | Canned exchange plus message |

/// Shipped parameter values and demo inputs.
pub mod constants;

/// Error types for tutor-core operations.
pub mod errors;

/// Public Diffie-Hellman parameters.
pub mod params;

/// Two-party Diffie-Hellman key exchange.
pub mod key_exchange;

/// Repeating-key XOR stream cipher.
pub mod cipher;

/// Encoding utilities: hex report and base64.
pub mod encoding;

/// Demo exchange.
pub mod demo;

pub use cipher::{decrypt, encrypt, Ciphertext, EncryptedMessage};
pub use errors::{Result, TutorError};
pub use key_exchange::{
    compute_public_key, compute_shared_secret, negotiate, negotiate_text, KeyExchangeReport,
    PublicKey, SharedSecret,
};
pub use params::DhParameters;
