//! Demo run: the canned exchange and message shown on first launch.

use num_bigint::BigInt;

use crate::cipher::{encrypt_with, EncryptedMessage};
use crate::constants::{DEMO_ALICE_PRIVATE, DEMO_BOB_PRIVATE, DEMO_MESSAGE};
use crate::errors::Result;
use crate::key_exchange::{negotiate, KeyExchangeReport};
use crate::params::DhParameters;

/// Result of [`demo_exchange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRun {
    pub report: KeyExchangeReport,
    pub message: EncryptedMessage,
}

/// Negotiate with the demo keys (Bob 5, Alice 4) and encrypt
/// [`DEMO_MESSAGE`] under the agreed secret.
///
/// # Errors
/// Fails if the demo keys are out of range for `params`.
pub fn demo_exchange(params: &DhParameters) -> Result<DemoRun> {
    let report = negotiate(
        params,
        &BigInt::from(DEMO_BOB_PRIVATE),
        &BigInt::from(DEMO_ALICE_PRIVATE),
    )?;
    let ciphertext = encrypt_with(report.secret(), DEMO_MESSAGE.as_bytes())?;
    Ok(DemoRun {
        report,
        message: ciphertext.into(),
    })
}
