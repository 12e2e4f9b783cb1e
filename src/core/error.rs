use std::fmt;

use thiserror::Error;

/// Errors returned by the [`Isikukood`](super::Isikukood) entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IsikukoodError {
    /// Caller-supplied input broke a structural or semantic rule.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A generated code failed re-validation. This is a defect in the
    /// codec or enumerator, never the caller's fault.
    #[error("internal invariant violated (this is a bug in isikukood): {0}")]
    Invariant(String),
}

/// The rule a [`ValidationError`] was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Check {
    /// Input contains something other than ASCII digits.
    Numeric,
    /// Input has the wrong number of characters.
    Length,
    /// First digit is not a gender marker (1-8).
    FirstDigit,
    /// Gender tag is neither `m` nor `f`.
    Gender,
    /// Year lies outside 1800-2199.
    YearRange,
    /// Month lies outside 1-12.
    MonthRange,
    /// Day lies outside 1-31.
    DayRange,
    /// Order number lies outside 0-999.
    OrderNumberRange,
    /// Date does not exist in the calendar.
    ExistingDate,
    /// Checksum digit does not match.
    Checksum,
    /// A batch contains the same code twice.
    Duplicate,
}

impl Check {
    /// Short identifier used in error output.
    pub fn as_str(self) -> &'static str {
        match self {
            Check::Numeric => "numeric",
            Check::Length => "length",
            Check::FirstDigit => "first-digit",
            Check::Gender => "gender",
            Check::YearRange => "year-range",
            Check::MonthRange => "month-range",
            Check::DayRange => "day-range",
            Check::OrderNumberRange => "order-number-range",
            Check::ExistingDate => "existing-date",
            Check::Checksum => "checksum",
            Check::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure with field name, message and the rule that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{check}] {field}: {message}")]
pub struct ValidationError {
    /// Name of the offending input (e.g. "code", "order_number", "days").
    pub field: String,
    /// Human-readable description including the offending value.
    pub message: String,
    /// Rule that failed.
    pub check: Check,
}

impl ValidationError {
    /// Create an error for `field` raised by `check`.
    pub fn new(check: Check, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            check,
        }
    }
}
