//! Trace types, recording what the checker did to each digit.

use std::fmt;

/// One digit's treatment, numbered from the right starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuhnStep {
    /// 1 for the rightmost digit.
    pub position_from_right: usize,
    pub original_digit: u8,
    /// Set on even positions (2nd, 4th, ...).
    pub doubled: bool,
    /// Value added to the sum.
    pub transformed_digit: u8,
}

impl LuhnStep {
    /// Whether 9 was subtracted after doubling.
    pub fn reduced(&self) -> bool {
        self.doubled && self.original_digit >= 5
    }

    /// Short label for the operation: `x1`, `x2` or `x2 (-9)`.
    pub fn action(&self) -> &'static str {
        match (self.doubled, self.reduced()) {
            (false, _) => "x1",
            (true, false) => "x2",
            (true, true) => "x2 (-9)",
        }
    }
}

/// Per-digit steps in right-to-left order, plus the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuhnTrace {
    /// Text as typed.
    pub input: String,
    /// Input with whitespace removed.
    pub digits: String,
    pub steps: Vec<LuhnStep>,
    /// Sum of every `transformed_digit`.
    pub sum: u64,
    /// `sum % 10`.
    pub remainder: u8,
}

impl LuhnTrace {
    pub fn is_valid(&self) -> bool {
        self.remainder == 0
    }
}

const RULE: &str = "+-----+-------+---------+--------+";

impl fmt::Display for LuhnTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input)?;
        writeln!(f, "Digits: {} ({} digits)", self.digits, self.digits.len())?;
        writeln!(f, "Right to left:")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "| Pos | Digit | Action  | Result |")?;
        writeln!(f, "{RULE}")?;
        for step in &self.steps {
            writeln!(
                f,
                "| {:>3} | {:>5} | {:<7} | {:>6} |",
                step.position_from_right,
                step.original_digit,
                step.action(),
                step.transformed_digit
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total sum: {}", self.sum)?;
        write!(f, "Check: {} % 10 = {}", self.sum, self.remainder)
    }
}

/// Verdict and the trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuhnOutcome {
    pub is_valid: bool,
    pub trace: LuhnTrace,
}

impl fmt::Display for LuhnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.trace)?;
        write!(
            f,
            "Result: {}",
            if self.is_valid { "VALID" } else { "INVALID" }
        )
    }
}
