//! Sample inputs and display defaults.

/// A number that passes the Luhn check (sum 60).
pub const SAMPLE_VALID: &str = "5062 8212 3456 7892";

/// [`SAMPLE_VALID`] with one undoubled digit changed (sum 65).
pub const SAMPLE_INVALID: &str = "5062 8217 3456 7892";

/// Digits per group when re-spacing a number for display.
pub const DEFAULT_GROUP_SIZE: usize = 4;
