//! Storage helper utilities for common storage patterns

use soroban_sdk::{Address, Env};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const ADMIN: Symbol = symbol_short!("ADMIN");
    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Ledger-count constants for entry TTL management (~5s per ledger)
pub mod ttl {
    pub const DAY_IN_LEDGERS: u32 = 17280;

    pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
    pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

    pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
    pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
}

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    ///
    /// # Returns
    /// `true` if initialized, `false` otherwise
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Get admin address from storage, `None` before initialization
    pub fn admin(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::ADMIN)
    }

    /// Set admin address in storage
    pub fn set_admin(e: &Env, admin: &Address) {
        e.storage().instance().set(&keys::ADMIN, admin);
    }

    /// Extend the contract instance TTL so config and admin stay live
    pub fn extend_instance(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(ttl::INSTANCE_LIFETIME_THRESHOLD, ttl::INSTANCE_BUMP_AMOUNT);
    }
}
