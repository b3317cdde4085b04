#![no_std]

//! SimpleToken: a fixed-supply fungible token
//!
//! The whole supply is credited to the deployer at initialization and never
//! changes afterwards. Senders must keep a retained `reserve` after every
//! non-zero transfer, so moving an account's entire balance is rejected
//! while the reserve is above zero.

use shared_utils::{ErrorHelper, Events, SafeMath, Storage, Validation};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
};


/// Upper bound on `decimals`, matching common token metadata practice
pub const MAX_DECIMALS: u32 = 18;

// ============================================================================
// Error Types
// ============================================================================

/// Token contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not the admin
    Unauthorized = 3,
    /// Amount is negative
    InvalidAmount = 4,
    /// Initialization or reserve parameters are out of range
    InvalidConfig = 5,
    /// Sender balance is lower than the amount
    InsufficientBalance = 6,
    /// Transfer would leave the sender below the retained reserve
    BelowReserve = 7,
    /// Spender allowance is lower than the amount
    InsufficientAllowance = 8,
    /// Allowance expiration is in the past or beyond the maximum entry TTL
    InvalidExpiration = 9,
    /// Arithmetic overflow
    Overflow = 10,
}

impl TokenError {
    /// Human-readable message for this error (for logs and clients).
    pub fn message(&self) -> &'static str {
        match self {
            TokenError::NotInitialized => "Contract not initialized",
            TokenError::AlreadyInitialized => "Contract already initialized",
            TokenError::Unauthorized => "Unauthorized: caller is not the admin",
            TokenError::InvalidAmount => "Invalid amount: must be non-negative",
            TokenError::InvalidConfig => "Invalid token configuration",
            TokenError::InsufficientBalance => "Insufficient balance",
            TokenError::BelowReserve => "Transfer would leave sender below reserve",
            TokenError::InsufficientAllowance => "Insufficient allowance",
            TokenError::InvalidExpiration => "Expiration ledger out of range",
            TokenError::Overflow => "Arithmetic overflow",
        }
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// Parameters fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: i128,
    /// Minimum balance a sender keeps after a non-zero transfer
    pub reserve: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    /// Token configuration (singleton, instance storage)
    Config,
    /// Account balance (persistent storage)
    Balance(Address),
    /// Spending allowance (temporary storage)
    Allowance(AllowanceKey),
}

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;
    use shared_utils::storage::ttl;

    // --- Config ---

    pub fn set_config(e: &Env, config: &TokenConfig) {
        e.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(e: &Env) -> Result<TokenConfig, TokenError> {
        e.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(TokenError::NotInitialized)
    }

    // --- Balances ---

    pub fn read_balance(e: &Env, id: &Address) -> i128 {
        let key = DataKey::Balance(id.clone());
        match e.storage().persistent().get::<_, i128>(&key) {
            Some(balance) => {
                e.storage().persistent().extend_ttl(
                    &key,
                    ttl::BALANCE_LIFETIME_THRESHOLD,
                    ttl::BALANCE_BUMP_AMOUNT,
                );
                balance
            }
            None => 0,
        }
    }

    pub fn write_balance(e: &Env, id: &Address, amount: i128) {
        let key = DataKey::Balance(id.clone());
        e.storage().persistent().set(&key, &amount);
        e.storage().persistent().extend_ttl(
            &key,
            ttl::BALANCE_LIFETIME_THRESHOLD,
            ttl::BALANCE_BUMP_AMOUNT,
        );
    }

    // --- Allowances ---

    pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        match e.storage().temporary().get::<_, AllowanceValue>(&key) {
            Some(allowance) if allowance.expiration_ledger >= e.ledger().sequence() => allowance,
            Some(allowance) => AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            },
            None => AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
        }
    }

    pub fn write_allowance(
        e: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        let allowance = AllowanceValue {
            amount,
            expiration_ledger,
        };
        e.storage().temporary().set(&key, &allowance);

        if amount > 0 {
            let live_for = expiration_ledger.saturating_sub(e.ledger().sequence());
            if live_for > 0 {
                e.storage().temporary().extend_ttl(&key, live_for, live_for);
            }
        }
    }
}

// ============================================================================
// Contract
// ============================================================================

#[contract]
pub struct SimpleTokenContract;

#[contractimpl]
impl SimpleTokenContract {
    /// Initialize the token and credit the whole supply to `admin`
    ///
    /// # Arguments
    /// * `admin` - The deployer; receives `config.total_supply`
    /// * `config` - Token metadata, supply and retained reserve
    pub fn initialize(e: Env, admin: Address, config: TokenConfig) -> Result<(), TokenError> {
        if Storage::is_initialized(&e) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();

        let valid = Validation::is_non_empty_string(&config.name)
            && Validation::is_non_empty_string(&config.symbol)
            && config.decimals <= MAX_DECIMALS
            && Validation::is_positive(config.total_supply)
            && Validation::is_in_range(config.reserve, 0, config.total_supply);
        if !valid {
            let err = TokenError::InvalidConfig;
            return Err(ErrorHelper::reject(&e, "initialize", err.message(), err));
        }

        Storage::set_initialized(&e);
        Storage::set_admin(&e, &admin);
        storage::set_config(&e, &config);
        storage::write_balance(&e, &admin, config.total_supply);
        Storage::extend_instance(&e);

        Events::emit_initialized(&e, &admin, config.total_supply);
        Events::emit_transfer(
            &e,
            &e.current_contract_address(),
            &admin,
            config.total_supply,
        );

        Ok(())
    }

    /// Fixed total supply
    pub fn total_supply(e: Env) -> Result<i128, TokenError> {
        Ok(storage::get_config(&e)?.total_supply)
    }

    /// Balance of `id`, zero for accounts that never held tokens
    pub fn balance(e: Env, id: Address) -> i128 {
        storage::read_balance(&e, &id)
    }

    pub fn name(e: Env) -> Result<String, TokenError> {
        Ok(storage::get_config(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, TokenError> {
        Ok(storage::get_config(&e)?.symbol)
    }

    pub fn decimals(e: Env) -> Result<u32, TokenError> {
        Ok(storage::get_config(&e)?.decimals)
    }

    /// Minimum balance a sender must keep after a non-zero transfer
    pub fn reserve(e: Env) -> Result<i128, TokenError> {
        Ok(storage::get_config(&e)?.reserve)
    }

    pub fn admin(e: Env) -> Result<Address, TokenError> {
        Storage::admin(&e).ok_or(TokenError::NotInitialized)
    }

    /// Move `amount` from `from` to `to`
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount` is negative
    /// * `InsufficientBalance` - `from` holds less than `amount`
    /// * `BelowReserve` - `from` would keep less than the reserve
    ///
    /// Zero-amount and self transfers only check the balance and change nothing.
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        Self::move_balance(&e, "transfer", &from, &to, amount)?;
        Events::emit_transfer(&e, &from, &to, amount);
        Ok(())
    }

    /// Allow `spender` to move up to `amount` of `from`'s tokens until
    /// `expiration_ledger` (inclusive)
    ///
    /// A non-zero allowance must expire between the current ledger and the
    /// host's maximum live-until ledger, else `InvalidExpiration`.
    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        Storage::extend_instance(&e);

        if !Validation::is_non_negative(amount) {
            let err = TokenError::InvalidAmount;
            return Err(ErrorHelper::reject(&e, "approve", err.message(), err));
        }
        if amount > 0
            && (expiration_ledger < e.ledger().sequence()
                || expiration_ledger > e.ledger().max_live_until_ledger())
        {
            let err = TokenError::InvalidExpiration;
            return Err(ErrorHelper::reject(&e, "approve", err.message(), err));
        }

        storage::write_allowance(&e, &from, &spender, amount, expiration_ledger);
        Events::emit_approve(&e, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    /// Remaining allowance, zero when absent or expired
    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&e, &from, &spender).amount
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();

        if !Validation::is_non_negative(amount) {
            let err = TokenError::InvalidAmount;
            return Err(ErrorHelper::reject(&e, "transfer_from", err.message(), err));
        }

        let allowance = storage::read_allowance(&e, &from, &spender);
        if allowance.amount < amount {
            let err = TokenError::InsufficientAllowance;
            return Err(ErrorHelper::reject(&e, "transfer_from", err.message(), err));
        }

        Self::move_balance(&e, "transfer_from", &from, &to, amount)?;

        if amount > 0 {
            storage::write_allowance(
                &e,
                &from,
                &spender,
                allowance.amount - amount,
                allowance.expiration_ledger,
            );
        }

        Events::emit_transfer(&e, &from, &to, amount);
        Ok(())
    }

    /// Change the retained reserve (admin only)
    pub fn set_reserve(e: Env, caller: Address, reserve: i128) -> Result<(), TokenError> {
        caller.require_auth();

        let admin = Storage::admin(&e).ok_or(TokenError::NotInitialized)?;
        if caller != admin {
            let err = TokenError::Unauthorized;
            return Err(ErrorHelper::reject(&e, "set_reserve", err.message(), err));
        }

        let mut config = storage::get_config(&e)?;
        if !Validation::is_in_range(reserve, 0, config.total_supply) {
            let err = TokenError::InvalidConfig;
            return Err(ErrorHelper::reject(&e, "set_reserve", err.message(), err));
        }

        config.reserve = reserve;
        storage::set_config(&e, &config);
        Storage::extend_instance(&e);

        Events::emit_updated(&e, symbol_short!("reserve"), reserve);
        Ok(())
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Check and apply a balance move. Writes nothing on rejection.
    fn move_balance(
        e: &Env,
        context: &str,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        let config = storage::get_config(e)?;
        Storage::extend_instance(e);

        if !Validation::is_non_negative(amount) {
            let err = TokenError::InvalidAmount;
            return Err(ErrorHelper::reject(e, context, err.message(), err));
        }

        let from_balance = storage::read_balance(e, from);
        let remaining = match SafeMath::debit(from_balance, amount) {
            Some(remaining) => remaining,
            None => {
                let err = TokenError::InsufficientBalance;
                return Err(ErrorHelper::reject(e, context, err.message(), err));
            }
        };

        if amount == 0 || from == to {
            return Ok(());
        }

        if remaining < config.reserve {
            let err = TokenError::BelowReserve;
            return Err(ErrorHelper::reject(e, context, err.message(), err));
        }

        let to_balance = storage::read_balance(e, to);
        let credited = SafeMath::add(to_balance, amount).ok_or(TokenError::Overflow)?;

        storage::write_balance(e, from, remaining);
        storage::write_balance(e, to, credited);
        Ok(())
    }
}
