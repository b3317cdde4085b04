#![no_std]

//! Shared utility library for Soroban smart contracts
//!
//! This library provides common functions, helpers, and patterns used by
//! the token contracts in this workspace:
//! - Math utilities (checked balance arithmetic)
//! - Validation predicates
//! - Storage helpers (initialization flag, admin, TTL management)
//! - Error logging helpers
//! - Event emission patterns

pub mod errors;
pub mod events;
pub mod math;
pub mod storage;
pub mod validation;


// Re-export commonly used items
pub use errors::*;
pub use events::*;
pub use math::*;
pub use storage::Storage;
pub use validation::*;
