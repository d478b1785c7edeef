//! Luhn checksum: validation, check digit, display grouping.
//!
//! ```text
//! strip whitespace -> reject non-digits -> walk right to left
//! position 1 (rightmost) kept, position 2 doubled, 3 kept, ...
//! doubled > 9 -> subtract 9
//! valid <=> sum % 10 == 0
//! ```
//!
//! All functions are pure; identical input gives identical output.

use crate::errors::{LuhnError, Result};
use crate::types::{LuhnOutcome, LuhnStep, LuhnTrace};

/// Remove all whitespace and check that only ASCII digits remain.
///
/// # Errors
/// - `LuhnError::NoDigits` if nothing remains.
/// - `LuhnError::NonDigitCharacter` for the first other character, with
///   its char index in the stripped string and in `raw`.
pub fn normalize(raw: &str) -> Result<String> {
    let mut stripped = String::with_capacity(raw.len());
    for (input_index, c) in raw.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if !c.is_ascii_digit() {
            return Err(LuhnError::NonDigitCharacter {
                found: c,
                index: stripped.len(),
                input_index,
            });
        }
        stripped.push(c);
    }
    if stripped.is_empty() {
        return Err(LuhnError::NoDigits);
    }
    Ok(stripped)
}

/// Validate `raw` and return the verdict with its per-digit trace.
///
/// Whitespace anywhere in `raw` is ignored.
///
/// # Errors
/// Returns a `NON_DIGIT_CHARACTER` error if the stripped input is empty
/// or contains anything other than `0`-`9`.
pub fn validate(raw: &str) -> Result<LuhnOutcome> {
    let trace = trace_digits(raw, normalize(raw)?);
    let is_valid = trace.is_valid();

    tracing::debug!(
        digits = trace.steps.len(),
        sum = trace.sum,
        valid = is_valid,
        "luhn check"
    );

    Ok(LuhnOutcome { is_valid, trace })
}

/// Verdict only, without the trace.
///
/// # Errors
/// Same input rules as [`validate`]; malformed input is an error, not
/// `false`.
pub fn is_valid(raw: &str) -> Result<bool> {
    validate(raw).map(|o| o.is_valid)
}

/// The digit that, appended to `partial`, makes it pass.
///
/// # Errors
/// Same input rules as [`validate`].
pub fn check_digit(partial: &str) -> Result<u8> {
    let mut digits = normalize(partial)?;
    digits.push('0');
    let remainder = trace_digits(partial, digits).remainder;
    Ok((10 - remainder) % 10)
}

/// Re-space `raw` into groups of `group_size` digits from the left.
///
/// A `group_size` of 0 returns the bare digits.
///
/// # Errors
/// Same input rules as [`validate`].
pub fn group_digits(raw: &str, group_size: usize) -> Result<String> {
    let digits = normalize(raw)?;
    if group_size == 0 {
        return Ok(digits);
    }
    // Digits are ASCII, so byte chunks are char chunks.
    let groups: Vec<&str> = digits
        .as_bytes()
        .chunks(group_size)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    Ok(groups.join(" "))
}

// `digits` must already be normalized.
fn trace_digits(input: &str, digits: String) -> LuhnTrace {
    let steps: Vec<LuhnStep> = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let original_digit = b - b'0';
            let doubled = i % 2 == 1;
            let transformed_digit = match (doubled, original_digit * 2) {
                (false, _) => original_digit,
                (true, d) if d > 9 => d - 9,
                (true, d) => d,
            };
            LuhnStep {
                position_from_right: i + 1,
                original_digit,
                doubled,
                transformed_digit,
            }
        })
        .collect();

    let sum: u64 = steps.iter().map(|s| u64::from(s.transformed_digit)).sum();
    LuhnTrace {
        input: input.to_string(),
        digits,
        steps,
        sum,
        remainder: (sum % 10) as u8,
    }
}
