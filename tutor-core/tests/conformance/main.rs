//! Conformance harness: behavioral invariants of tutor-core.
//!
//! Invariant coverage:
//! - Exchange symmetry for every valid key pair (small parameter sets)
//! - Private key range enforcement at both bounds
//! - Cipher round-trip and hex report round-trip
//! - Error kind stability

mod cipher_round_trip;
mod error_code_mapping;
mod exchange_symmetry;
