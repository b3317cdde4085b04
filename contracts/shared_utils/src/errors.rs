//! Error logging utilities
//!
//! Contracts report failures by returning their own `contracterror` enums.
//! These helpers record the context of a rejection in the diagnostic log
//! before the error is returned to the caller.

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context (usually the operation name)
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log an error with context and pass it through.
    ///
    /// Lets call sites write `return Err(ErrorHelper::reject(&e, "transfer", msg, err))`.
    pub fn reject<E>(e: &Env, context: &str, message: &str, error: E) -> E {
        Self::log_error_with_context(e, context, message);
        error
    }
}
