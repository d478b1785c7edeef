//! Encoding utilities: hex report and base64.
//!
//! The hex report is the transport form of a ciphertext through a text
//! field: uppercase two-digit octets separated by single spaces, e.g.
//! `"79 58"`. Base64 uses the `base64` crate with the STANDARD engine
//! and is display-only.
//!
//! ## Round-trip
//! `parse_hex_report(&to_hex_report(x)) == x` for arbitrary input.

use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::constants::HEX_REPORT_SEPARATOR;
use crate::errors::{Result, TutorError};

/// Encode bytes as an uppercase, space-separated hex report.
pub fn to_hex_report(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, b) in data.iter().enumerate() {
        if i > 0 {
            out.push(HEX_REPORT_SEPARATOR);
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{b:02X}");
    }
    out
}

/// Decode a hex report back to bytes.
///
/// Tokens are split on any run of whitespace, so a trailing separator or
/// a line break is tolerated. Each token must be exactly two hex digits
/// (either case). Blank text decodes to an empty sequence.
///
/// # Errors
/// Returns `TutorError::MalformedHex` naming the first bad token.
pub fn parse_hex_report(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| parse_octet(token).ok_or_else(|| malformed(i, token)))
        .collect()
}

fn parse_octet(token: &str) -> Option<u8> {
    // from_str_radix alone would accept a leading '+'.
    if token.len() != 2 || !token.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

fn malformed(index: usize, token: &str) -> TutorError {
    TutorError::MalformedHex(format!(
        "token {index} {token:?} is not a two-digit hex octet"
    ))
}

/// Encode bytes to standard base64 (RFC 4648, with padding).
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}
