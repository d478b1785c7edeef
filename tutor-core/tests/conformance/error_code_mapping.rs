//! Conformance: Error Kind Stability
//!
//! Each failure path surfaces a distinct, inspectable error kind. Hosts
//! match on `TutorError::code()`; these strings must not drift.

use num_bigint::{BigInt, BigUint};
use tutor_core::cipher::{decrypt_message, encrypt};
use tutor_core::errors::{is_known_error_code, ERROR_CODES};
use tutor_core::key_exchange::{negotiate, negotiate_text, parse_secret};
use tutor_core::params::DhParameters;
use tutor_core::TutorError;

#[test]
fn conformance_error_registry_is_stable() {
    assert_eq!(
        ERROR_CODES,
        [
            "INVALID_KEY_RANGE",
            "KEY_MISMATCH",
            "NON_NUMERIC_INPUT",
            "EMPTY_KEY",
            "MALFORMED_HEX",
            "INVALID_PARAMETERS",
        ]
    );
}

#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(TutorError, &str)> = vec![
        (
            TutorError::InvalidKeyRange {
                key: BigInt::from(13),
                modulus: BigUint::from(13u32),
            },
            "Private key 13 out of range: must satisfy 1 <= key < 13",
        ),
        (
            TutorError::KeyMismatch {
                bob: BigUint::from(1u32),
                alice: BigUint::from(2u32),
            },
            "Key mismatch: Bob derived 1, Alice derived 2",
        ),
        (
            TutorError::NonNumericInput("five".into()),
            "Non-numeric input: \"five\"",
        ),
        (
            TutorError::EmptyKey,
            "Empty key: cipher key material must not be empty",
        ),
        (
            TutorError::MalformedHex("bad".into()),
            "Malformed hex: bad",
        ),
        (
            TutorError::InvalidParameters("generator must be positive".into()),
            "Invalid parameters: generator must be positive",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "TutorError display drift detected");
    }
}

#[test]
fn conformance_each_path_yields_its_kind() {
    let params = DhParameters::classroom();
    let observed = [
        negotiate(&params, &BigInt::from(0), &BigInt::from(4)).unwrap_err(),
        negotiate_text(&params, "five", "4").unwrap_err(),
        encrypt("", b"m").unwrap_err(),
        decrypt_message("1", "GG").unwrap_err(),
        parse_secret("not established").unwrap_err(),
        DhParameters::from_u64(1, 2).unwrap_err(),
    ];
    let codes: Vec<&str> = observed.iter().map(TutorError::code).collect();
    assert_eq!(
        codes,
        [
            "INVALID_KEY_RANGE",
            "NON_NUMERIC_INPUT",
            "EMPTY_KEY",
            "MALFORMED_HEX",
            "NON_NUMERIC_INPUT",
            "INVALID_PARAMETERS",
        ]
    );
    assert!(codes.iter().all(|c| is_known_error_code(c)));
}
