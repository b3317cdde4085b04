//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit an event with multiple topics
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit an initialization event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `admin` - The deployer that received the supply
    /// * `total_supply` - The fixed supply allocated at initialization
    pub fn emit_initialized(e: &Env, admin: &Address, total_supply: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("init"), admin.clone()),
            (total_supply, e.ledger().timestamp()),
        );
    }

    /// Emit a transfer event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `from` - The sender address
    /// * `to` - The recipient address
    /// * `amount` - The transfer amount
    pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("transfer"), from.clone(), to.clone()),
            amount,
        );
    }

    /// Emit an allowance approval event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `from` - The owner granting the allowance
    /// * `spender` - The address allowed to spend
    /// * `amount` - The approved amount
    /// * `expiration_ledger` - Last ledger the allowance is valid for
    pub fn emit_approve(
        e: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        Self::emit_with_topics(
            e,
            (symbol_short!("approve"), from.clone(), spender.clone()),
            (amount, expiration_ledger),
        );
    }

    /// Emit a configuration update event
    pub fn emit_updated(e: &Env, field: Symbol, value: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("updated"), field),
            (value, e.ledger().timestamp()),
        );
    }
}
