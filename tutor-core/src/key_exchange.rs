//! Key exchange: two-party Diffie-Hellman over [`DhParameters`].
//!
//! ```text
//! public = g^private mod p
//! secret = peer_public^own_private mod p
//! ```
//!
//! Exponentiation is `BigUint::modpow` (square-and-multiply over
//! arbitrary-precision integers), so the same code is correct for
//! realistic parameter sizes. The classroom parameters are tiny and
//! degenerate; see [`DhParameters::is_degenerate`].
//!
//! ## Invariants
//! - Private keys satisfy `1 <= key < modulus` or the call fails with
//!   `TutorError::InvalidKeyRange`. Nothing is clamped.
//! - Public keys are always recomputed from the private key.
//! - `negotiate` derives the secret on both sides and fails with
//!   `TutorError::KeyMismatch` if they differ.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::Rng;

use crate::errors::{Result, TutorError};
use crate::params::DhParameters;

/// `g^private mod p` for one party.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey(BigUint);

impl PublicKey {
    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl From<BigUint> for PublicKey {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Secret derived by a party from its private key and the peer's public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedSecret(BigUint);

impl SharedSecret {
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Decimal text of the secret. The stream cipher is keyed by the
    /// bytes of this string, not by the integer value.
    pub fn key_material(&self) -> String {
        self.0.to_str_radix(10)
    }
}

impl fmt::Display for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BigUint> for SharedSecret {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for SharedSecret {
    type Err = TutorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_secret(s)
    }
}

/// Outcome of a full two-party exchange, kept for display.
///
/// Only [`negotiate`] builds one, so every report is internally
/// consistent. With the `serde` feature it serializes but never
/// deserializes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyExchangeReport {
    params: DhParameters,
    bob_private: BigUint,
    alice_private: BigUint,
    bob_public: PublicKey,
    alice_public: PublicKey,
    secret: SharedSecret,
}

impl KeyExchangeReport {
    pub fn params(&self) -> &DhParameters {
        &self.params
    }

    pub fn bob_private(&self) -> &BigUint {
        &self.bob_private
    }

    pub fn alice_private(&self) -> &BigUint {
        &self.alice_private
    }

    pub fn bob_public(&self) -> &PublicKey {
        &self.bob_public
    }

    pub fn alice_public(&self) -> &PublicKey {
        &self.alice_public
    }

    /// The agreed secret (identical on both sides).
    pub fn secret(&self) -> &SharedSecret {
        &self.secret
    }
}

impl fmt::Display for KeyExchangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params.modulus();
        let g = self.params.generator();

        writeln!(f, "DIFFIE-HELLMAN KEY EXCHANGE")?;
        writeln!(f)?;
        writeln!(f, "* PUBLIC PARAMETERS:")?;
        writeln!(f, "   P = {p} (modulus)")?;
        writeln!(f, "   G = {g} (generator)")?;
        writeln!(f)?;
        writeln!(f, "* PRIVATE KEYS (secret):")?;
        writeln!(f, "   Bob's private key   = {}", self.bob_private)?;
        writeln!(f, "   Alice's private key = {}", self.alice_private)?;
        writeln!(f)?;
        writeln!(f, "* PUBLIC KEYS (sent in the clear):")?;
        writeln!(
            f,
            "   Bob:   {g}^{} mod {p} = {}",
            self.bob_private, self.bob_public
        )?;
        writeln!(
            f,
            "   Alice: {g}^{} mod {p} = {}",
            self.alice_private, self.alice_public
        )?;
        writeln!(f)?;
        writeln!(f, "* SHARED SECRET:")?;
        writeln!(
            f,
            "   Bob:   {}^{} mod {p} = {}",
            self.alice_public, self.bob_private, self.secret
        )?;
        writeln!(
            f,
            "   Alice: {}^{} mod {p} = {}",
            self.bob_public, self.alice_private, self.secret
        )?;
        writeln!(f)?;
        writeln!(f, "* RESULT: keys match")?;
        write!(f, "   Shared secret: {}", self.secret)
    }
}

/// Check `1 <= key < modulus` and return the key as unsigned.
///
/// # Errors
/// Returns `TutorError::InvalidKeyRange` otherwise.
pub fn validate_private_key(params: &DhParameters, key: &BigInt) -> Result<BigUint> {
    let in_range = key.sign() != Sign::Minus
        && !key.magnitude().is_zero()
        && key.magnitude() < params.modulus();
    if !in_range {
        return Err(TutorError::InvalidKeyRange {
            key: key.clone(),
            modulus: params.modulus().clone(),
        });
    }
    Ok(key.magnitude().clone())
}

/// Compute `g^private_key mod p`.
///
/// # Errors
/// Returns `TutorError::InvalidKeyRange` if `private_key` is outside
/// `[1, modulus)`.
pub fn compute_public_key(params: &DhParameters, private_key: &BigInt) -> Result<PublicKey> {
    let exponent = validate_private_key(params, private_key)?;
    Ok(derive_public(params, &exponent))
}

/// Compute `peer_public^own_private mod p`.
///
/// `peer_public` is not range-checked; it is a derived value.
///
/// # Errors
/// Returns `TutorError::InvalidKeyRange` if `own_private` is outside
/// `[1, modulus)`.
pub fn compute_shared_secret(
    params: &DhParameters,
    own_private: &BigInt,
    peer_public: &PublicKey,
) -> Result<SharedSecret> {
    let exponent = validate_private_key(params, own_private)?;
    Ok(derive_secret(params, &exponent, peer_public))
}

// `exponent` must already be validated.
fn derive_public(params: &DhParameters, exponent: &BigUint) -> PublicKey {
    PublicKey(params.generator().modpow(exponent, params.modulus()))
}

fn derive_secret(params: &DhParameters, exponent: &BigUint, peer: &PublicKey) -> SharedSecret {
    SharedSecret(peer.0.modpow(exponent, params.modulus()))
}

/// Run the full exchange between Bob and Alice.
///
/// # Errors
/// - `TutorError::InvalidKeyRange` if either private key is out of range
///   (Bob's is checked first).
/// - `TutorError::KeyMismatch` if the two derived secrets differ. This
///   cannot happen for consistent arithmetic and signals a bug.
pub fn negotiate(
    params: &DhParameters,
    bob_private: &BigInt,
    alice_private: &BigInt,
) -> Result<KeyExchangeReport> {
    let bob_key = validate_private_key(params, bob_private)?;
    let alice_key = validate_private_key(params, alice_private)?;

    let bob_public = derive_public(params, &bob_key);
    let alice_public = derive_public(params, &alice_key);

    let secret_bob = derive_secret(params, &bob_key, &alice_public);
    let secret_alice = derive_secret(params, &alice_key, &bob_public);
    let secret = check_agreement(secret_bob, secret_alice)?;

    tracing::debug!(
        modulus = %params.modulus(),
        generator = %params.generator(),
        bob_public = %bob_public,
        alice_public = %alice_public,
        "key exchange negotiated"
    );

    Ok(KeyExchangeReport {
        params: params.clone(),
        bob_private: bob_key,
        alice_private: alice_key,
        bob_public,
        alice_public,
        secret,
    })
}

fn check_agreement(bob: SharedSecret, alice: SharedSecret) -> Result<SharedSecret> {
    if bob != alice {
        tracing::warn!("derived secrets disagree; arithmetic is inconsistent");
        return Err(TutorError::KeyMismatch {
            bob: bob.0,
            alice: alice.0,
        });
    }
    Ok(bob)
}

/// Parse and run the exchange from raw form-field text.
///
/// # Errors
/// `TutorError::NonNumericInput` for unparseable text, then as [`negotiate`].
pub fn negotiate_text(
    params: &DhParameters,
    bob_private: &str,
    alice_private: &str,
) -> Result<KeyExchangeReport> {
    let bob = parse_private_key(bob_private)?;
    let alice = parse_private_key(alice_private)?;
    negotiate(params, &bob, &alice)
}

/// Parse a signed decimal integer, ignoring surrounding whitespace.
///
/// Negative values parse; range validation rejects them later.
///
/// # Errors
/// Returns `TutorError::NonNumericInput` for anything else.
pub fn parse_private_key(text: &str) -> Result<BigInt> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if !is_decimal(digits) {
        return Err(TutorError::NonNumericInput(text.to_string()));
    }
    trimmed
        .parse::<BigInt>()
        .map_err(|_| TutorError::NonNumericInput(text.to_string()))
}

/// Parse a previously established secret from its decimal text.
///
/// # Errors
/// Returns `TutorError::NonNumericInput` unless the trimmed text is a
/// non-empty run of ASCII digits.
pub fn parse_secret(text: &str) -> Result<SharedSecret> {
    let trimmed = text.trim();
    if !is_decimal(trimmed) {
        return Err(TutorError::NonNumericInput(text.to_string()));
    }
    BigUint::from_str(trimmed)
        .map(SharedSecret)
        .map_err(|_| TutorError::NonNumericInput(text.to_string()))
}

// num-bigint's parser also accepts '_' separators; form input must not.
fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit())
}

/// Draw a private key uniformly from `[1, modulus)` using the OS RNG.
pub fn generate_private_key(params: &DhParameters) -> BigInt {
    generate_private_key_with(params, &mut OsRng)
}

/// Draw a private key uniformly from `[1, modulus)` using `rng`.
pub fn generate_private_key_with<R: Rng + ?Sized>(params: &DhParameters, rng: &mut R) -> BigInt {
    BigInt::from(rng.gen_biguint_range(&BigUint::one(), params.modulus()))
}
