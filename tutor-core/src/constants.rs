//! Shipped parameter values and demo inputs.
//!
//! These seed [`crate::params::DhParameters::classroom`] and the demo run.
//! Operations never read them directly; parameters are always passed in.

/// Classroom modulus `p`.
pub const DEFAULT_MODULUS: u32 = 13;

/// Classroom generator `g`.
///
/// `53 mod 13 == 1`, so every derived key under the classroom parameters
/// is `1`. Kept as shipped.
pub const DEFAULT_GENERATOR: u32 = 53;

/// Bob's private key in the demo run.
pub const DEMO_BOB_PRIVATE: u32 = 5;

/// Alice's private key in the demo run.
pub const DEMO_ALICE_PRIVATE: u32 = 4;

/// Message encrypted by the demo run.
pub const DEMO_MESSAGE: &str = "Hello, Alice! This is a secret message from Bob.";

/// Separator between octets in a hex report.
pub const HEX_REPORT_SEPARATOR: char = ' ';
