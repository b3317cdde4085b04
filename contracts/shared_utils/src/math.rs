//! Math utilities for checked balance arithmetic

/// Checked math operations on token amounts.
///
/// Every operation returns `None` instead of wrapping or panicking, so
/// contracts can map overflow onto their own error type.
pub struct SafeMath;

impl SafeMath {
    /// Add two amounts, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Debit `amount` from `balance`.
    ///
    /// Returns `None` when the result would be negative or overflow.
    pub fn debit(balance: i128, amount: i128) -> Option<i128> {
        match balance.checked_sub(amount) {
            Some(left) if left >= 0 => Some(left),
            _ => None,
        }
    }

    /// Sum a slice of amounts, `None` on overflow
    pub fn sum(values: &[i128]) -> Option<i128> {
        values
            .iter()
            .try_fold(0i128, |acc, value| acc.checked_add(*value))
    }
}
