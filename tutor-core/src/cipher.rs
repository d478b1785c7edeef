//! Stream cipher: repeating-key XOR keyed by a shared secret.
//!
//! Key bytes are the UTF-8 bytes of the secret's decimal text, cycled
//! with `index mod key_len`. XOR is self-inverse, so [`encrypt`] and
//! [`decrypt`] are the same transform.
//!
//! NOT a secure cipher. It exists to show what a shared secret is for.
//!
//! ## Round-trip
//! - `decrypt(s, &encrypt(s, m)?)? == m` for any `m` and non-empty `s`.
//! - `Ciphertext::from_hex_report(&c.to_hex_report())? == c`.

use crate::encoding::{parse_hex_report, to_base64, to_hex_report};
use crate::errors::{Result, TutorError};
use crate::key_exchange::{parse_secret, SharedSecret};

/// Encrypted bytes. The hex report is only a transport encoding of this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase, space-separated hex octets.
    pub fn to_hex_report(&self) -> String {
        to_hex_report(&self.0)
    }

    /// Parse a hex report produced by [`Ciphertext::to_hex_report`].
    ///
    /// # Errors
    /// Returns `TutorError::MalformedHex` on any bad token.
    pub fn from_hex_report(text: &str) -> Result<Self> {
        parse_hex_report(text).map(Self)
    }

    /// Standard base64, display only.
    pub fn to_base64(&self) -> String {
        to_base64(&self.0)
    }
}

impl From<Vec<u8>> for Ciphertext {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// XOR `data` with `key` repeated to its length.
///
/// # Errors
/// Returns `TutorError::EmptyKey` if `key` is empty.
pub fn apply_keystream(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(TutorError::EmptyKey);
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}

/// Encrypt `plaintext` under the text key material `secret`.
///
/// # Errors
/// Returns `TutorError::EmptyKey` if `secret` is empty.
pub fn encrypt(secret: &str, plaintext: &[u8]) -> Result<Ciphertext> {
    let bytes = apply_keystream(secret.as_bytes(), plaintext)?;
    tracing::debug!(len = bytes.len(), "encrypted message");
    Ok(Ciphertext(bytes))
}

/// Decrypt `ciphertext` under `secret`. Same transform as [`encrypt`].
///
/// # Errors
/// Returns `TutorError::EmptyKey` if `secret` is empty.
pub fn decrypt(secret: &str, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
    let bytes = apply_keystream(secret.as_bytes(), ciphertext.as_bytes())?;
    tracing::debug!(len = bytes.len(), "decrypted message");
    Ok(bytes)
}

/// Encrypt with a negotiated secret.
pub fn encrypt_with(secret: &SharedSecret, plaintext: &[u8]) -> Result<Ciphertext> {
    encrypt(&secret.key_material(), plaintext)
}

/// Decrypt with a negotiated secret.
pub fn decrypt_with(secret: &SharedSecret, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
    decrypt(&secret.key_material(), ciphertext)
}

/// A ciphertext together with both of its text renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptedMessage {
    pub ciphertext: Ciphertext,
    pub hex: String,
    pub base64: String,
}

impl From<Ciphertext> for EncryptedMessage {
    fn from(ciphertext: Ciphertext) -> Self {
        Self {
            hex: ciphertext.to_hex_report(),
            base64: ciphertext.to_base64(),
            ciphertext,
        }
    }
}

/// Encrypt a UTF-8 message with a secret given as decimal text.
///
/// # Errors
/// `TutorError::NonNumericInput` if `secret_text` is not a non-negative
/// integer.
pub fn encrypt_message(secret_text: &str, message: &str) -> Result<EncryptedMessage> {
    let secret = parse_secret(secret_text)?;
    encrypt_with(&secret, message.as_bytes()).map(EncryptedMessage::from)
}

/// Parse a hex report and decrypt it to text.
///
/// Bytes that do not form valid UTF-8 (wrong key) are replaced with
/// U+FFFD rather than failing.
///
/// # Errors
/// `TutorError::NonNumericInput` for a bad secret, `TutorError::MalformedHex`
/// for a bad report.
pub fn decrypt_message(secret_text: &str, hex_report: &str) -> Result<String> {
    let secret = parse_secret(secret_text)?;
    let ciphertext = Ciphertext::from_hex_report(hex_report)?;
    let plaintext = decrypt_with(&secret, &ciphertext)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}
