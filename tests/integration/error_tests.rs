//! Error and Edge Case Tests
//!
//! These tests verify:
//! - Unauthorized access attempts
//! - Invalid input handling
//! - Boundary values (0, full balance, beyond balance)
//! - Expected error assertions

use crate::harness::{TestHarness, DEFAULT_RESERVE, INITIAL_SUPPLY};
use simple_token::TokenError;

// ============================================================================
// Initialization Errors
// ============================================================================

/// Test: Token cannot be initialized twice
#[test]
fn test_error_double_initialize() {
    let harness = TestHarness::new();
    let config = harness.token_config(INITIAL_SUPPLY, DEFAULT_RESERVE);

    let result = harness
        .client()
        .try_initialize(&harness.accounts.another, &config);

    assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
    assert_eq!(harness.balance(&harness.accounts.another), 0);
}

/// Test: Reads fail before the token is initialized
#[test]
fn test_error_uninitialized_reads() {
    let harness = TestHarness::undeployed();

    assert_eq!(
        harness.client().try_total_supply(),
        Err(Ok(TokenError::NotInitialized))
    );
    assert_eq!(
        harness.client().try_decimals(),
        Err(Ok(TokenError::NotInitialized))
    );
}

/// Test: Transfers fail before the token is initialized
#[test]
fn test_error_transfer_before_initialize() {
    let harness = TestHarness::undeployed();

    let result = harness.client().try_transfer(
        &harness.accounts.deployer,
        &harness.accounts.recipient,
        &1,
    );

    assert_eq!(result, Err(Ok(TokenError::NotInitialized)));
}

/// Test: Invalid supply and reserve combinations are refused
#[test]
fn test_error_invalid_config() {
    let harness = TestHarness::undeployed();
    let deployer = &harness.accounts.deployer;

    let negative_supply = harness.token_config(-1, 0);
    assert_eq!(
        harness.client().try_initialize(deployer, &negative_supply),
        Err(Ok(TokenError::InvalidConfig))
    );

    let negative_reserve = harness.token_config(INITIAL_SUPPLY, -1);
    assert_eq!(
        harness.client().try_initialize(deployer, &negative_reserve),
        Err(Ok(TokenError::InvalidConfig))
    );
}

// ============================================================================
// Transfer Errors
// ============================================================================

/// Test: Transfer of more than the balance fails
#[test]
fn test_error_insufficient_balance() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let recipient = &harness.accounts.recipient;

    let result = harness
        .client()
        .try_transfer(deployer, recipient, &(INITIAL_SUPPLY + 1));

    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(harness.balance(deployer), INITIAL_SUPPLY);
}

/// Test: Insufficient balance transfer panics through the plain client
#[test]
#[should_panic(expected = "Error(Contract, #6)")] // InsufficientBalance
fn test_error_insufficient_balance_panics() {
    let harness = TestHarness::new();

    harness.client().transfer(
        &harness.accounts.recipient,
        &harness.accounts.another,
        &1,
    );
}

/// Test: Full-balance transfer panics through the plain client
#[test]
#[should_panic(expected = "Error(Contract, #7)")] // BelowReserve
fn test_error_full_balance_panics() {
    let harness = TestHarness::new();

    harness.client().transfer(
        &harness.accounts.deployer,
        &harness.accounts.recipient,
        &INITIAL_SUPPLY,
    );
}

/// Test: Negative amounts are refused
#[test]
fn test_error_negative_amount() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let recipient = &harness.accounts.recipient;

    let result = harness.client().try_transfer(deployer, recipient, &-5);
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));

    let result = harness
        .client()
        .try_approve(deployer, recipient, &-5, &(harness.current_sequence() + 10));
    assert_eq!(result, Err(Ok(TokenError::InvalidAmount)));
}

/// Test: Zero-amount transfer succeeds and changes nothing
#[test]
fn test_zero_amount_transfer() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let recipient = &harness.accounts.recipient;

    harness.client().transfer(deployer, recipient, &0);

    assert_eq!(harness.balance(deployer), INITIAL_SUPPLY);
    assert_eq!(harness.balance(recipient), 0);
}

// ============================================================================
// Allowance Errors
// ============================================================================

/// Test: transfer_from beyond the allowance fails
#[test]
fn test_error_insufficient_allowance() {
    let harness = TestHarness::new();
    let owner = &harness.accounts.deployer;
    let spender = &harness.accounts.another;
    let recipient = &harness.accounts.recipient;

    harness.approve_tokens(owner, spender, 100);

    let result = harness
        .client()
        .try_transfer_from(spender, owner, recipient, &500);

    assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance)));
    assert_eq!(harness.client().allowance(owner, spender), 100);
}

/// Test: transfer_from without any approval fails
#[test]
fn test_error_no_allowance() {
    let harness = TestHarness::new();

    let result = harness.client().try_transfer_from(
        &harness.accounts.another,
        &harness.accounts.deployer,
        &harness.accounts.recipient,
        &1,
    );

    assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance)));
}

/// Test: Approval with an expiration in the past fails
#[test]
fn test_error_expired_approval() {
    let harness = TestHarness::new();
    harness.advance_ledgers(50);

    let result = harness.client().try_approve(
        &harness.accounts.deployer,
        &harness.accounts.another,
        &100,
        &(harness.current_sequence() - 1),
    );

    assert_eq!(result, Err(Ok(TokenError::InvalidExpiration)));
}

// ============================================================================
// Admin Errors
// ============================================================================

/// Test: Non-admin cannot change the reserve
#[test]
fn test_error_unauthorized_set_reserve() {
    let harness = TestHarness::new();

    let result = harness
        .client()
        .try_set_reserve(&harness.accounts.another, &0);

    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(harness.client().reserve(), DEFAULT_RESERVE);
}

/// Test: Admin can lower the reserve, which unlocks full-balance transfers
#[test]
fn test_admin_lowers_reserve() {
    let harness = TestHarness::new();
    let deployer = &harness.accounts.deployer;
    let recipient = &harness.accounts.recipient;

    harness.client().set_reserve(deployer, &0);
    harness.client().transfer(deployer, recipient, &INITIAL_SUPPLY);

    assert_eq!(harness.balance(deployer), 0);
    assert_eq!(harness.balance(recipient), INITIAL_SUPPLY);
}
