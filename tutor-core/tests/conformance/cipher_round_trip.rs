//! Conformance: Cipher Round-Trip
//!
//! Invariants under test:
//! - `decrypt(s, encrypt(s, m)) == m` for non-empty `s`
//! - `parse_hex_report(to_hex_report(c)) == c`
//! - Ciphertext length equals plaintext length
//! - Empty key material is rejected

use tutor_core::cipher::{decrypt, decrypt_with, encrypt, encrypt_with, Ciphertext};
use tutor_core::encoding::{parse_hex_report, to_hex_report};
use tutor_core::key_exchange::negotiate_text;
use tutor_core::params::DhParameters;
use tutor_core::TutorError;

fn messages() -> Vec<Vec<u8>> {
    let mut out = vec![
        Vec::new(),
        b"x".to_vec(),
        "Hello, Alice! This is a secret message from Bob.".as_bytes().to_vec(),
        "Привет, Алиса!".as_bytes().to_vec(),
    ];
    out.push((0..=255).collect());
    out.push((0..=255).rev().cycle().take(1000).collect());
    out
}

#[test]
fn conformance_round_trip_every_secret_below_200() {
    for secret in 0..200u32 {
        let key = secret.to_string();
        for m in messages() {
            let c = encrypt(&key, &m).unwrap();
            assert_eq!(c.len(), m.len());
            assert_eq!(decrypt(&key, &c).unwrap(), m, "secret {secret}");
        }
    }
}

#[test]
fn conformance_round_trip_with_negotiated_secret() {
    let params = DhParameters::from_u64(23, 5).unwrap();
    let report = negotiate_text(&params, "15", "6").unwrap();
    for m in messages() {
        let c = encrypt_with(report.secret(), &m).unwrap();
        assert_eq!(decrypt_with(report.secret(), &c).unwrap(), m);
    }
}

#[test]
fn conformance_hex_report_round_trip() {
    for m in messages() {
        let report = to_hex_report(&m);
        assert_eq!(parse_hex_report(&report).unwrap(), m);

        let c = Ciphertext::from(m.clone());
        assert_eq!(Ciphertext::from_hex_report(&c.to_hex_report()).unwrap(), c);
    }
}

#[test]
fn conformance_hex_report_shape() {
    let report = to_hex_report(&[0xab, 0x01, 0xff]);
    assert_eq!(report, "AB 01 FF");
    assert!(report
        .split(' ')
        .all(|t| t.len() == 2 && t.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())));
}

#[test]
fn conformance_empty_key_rejected() {
    for m in messages() {
        assert_eq!(encrypt("", &m).unwrap_err(), TutorError::EmptyKey);
        assert_eq!(
            decrypt("", &Ciphertext::from(m)).unwrap_err(),
            TutorError::EmptyKey
        );
    }
}
