//! Public Diffie-Hellman parameters.
//!
//! An explicit immutable value passed into every key exchange operation,
//! so the same code runs against the classroom constants and any other
//! parameter set.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{DEFAULT_GENERATOR, DEFAULT_MODULUS};
use crate::errors::{Result, TutorError};

/// Modulus `p` and generator `g`.
///
/// No primality or primitive-root check is made. The only requirements
/// are `modulus >= 2` and `generator >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDhParameters")
)]
pub struct DhParameters {
    modulus: BigUint,
    generator: BigUint,
}

impl DhParameters {
    /// Build a parameter set.
    ///
    /// # Errors
    /// Returns `TutorError::InvalidParameters` if `modulus < 2` or
    /// `generator == 0`.
    pub fn new(modulus: BigUint, generator: BigUint) -> Result<Self> {
        if modulus <= BigUint::one() {
            return Err(TutorError::InvalidParameters(format!(
                "modulus must be at least 2, got {modulus}"
            )));
        }
        if generator.is_zero() {
            return Err(TutorError::InvalidParameters(
                "generator must be positive".into(),
            ));
        }
        Ok(Self { modulus, generator })
    }

    /// Convenience constructor for small parameter sets.
    pub fn from_u64(modulus: u64, generator: u64) -> Result<Self> {
        Self::new(BigUint::from(modulus), BigUint::from(generator))
    }

    /// The shipped `p = 13, g = 53` parameters.
    pub fn classroom() -> Self {
        Self {
            modulus: BigUint::from(DEFAULT_MODULUS),
            generator: BigUint::from(DEFAULT_GENERATOR),
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// `true` when `generator mod modulus == 1`: every exchange then
    /// yields public keys and a secret of `1`.
    pub fn is_degenerate(&self) -> bool {
        (&self.generator % &self.modulus).is_one()
    }
}

// Deserialized values go through `DhParameters::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDhParameters {
    modulus: BigUint,
    generator: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDhParameters> for DhParameters {
    type Error = TutorError;

    fn try_from(raw: RawDhParameters) -> Result<Self> {
        Self::new(raw.modulus, raw.generator)
    }
}

impl Default for DhParameters {
    fn default() -> Self {
        Self::classroom()
    }
}
