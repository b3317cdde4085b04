//! Validation predicates for common input checks
//!
//! Predicates return `bool` so each contract can reject with its own
//! error variant.

use soroban_sdk::String;

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Whether an amount is strictly greater than zero
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// Whether an amount is greater than or equal to zero
    pub fn is_non_negative(amount: i128) -> bool {
        amount >= 0
    }

    /// Whether a string has at least one byte
    pub fn is_non_empty_string(value: &String) -> bool {
        !value.is_empty()
    }

    /// Whether `value` lies within `[min, max]` (inclusive)
    pub fn is_in_range(value: i128, min: i128, max: i128) -> bool {
        value >= min && value <= max
    }
}
