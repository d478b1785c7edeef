//! Tutor Luhn: Luhn checksum with an explainable trace.
//!
//! Pure logic: no IO, no clocks, no global state. The front end passes the
//! raw text of a number field and renders the returned [`LuhnOutcome`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Sample numbers and display defaults |
//! | [`errors`] | `LuhnError` |
//! | [`types`] | `LuhnStep`, `LuhnTrace`, `LuhnOutcome` |
//! | [`checker`] | `validate`, `check_digit`, `group_digits` |

pub mod checker;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export the canonical entrypoint and core types.
pub use checker::{check_digit, group_digits, is_valid, normalize, validate};
pub use errors::{LuhnError, Result};
pub use types::{LuhnOutcome, LuhnStep, LuhnTrace};
