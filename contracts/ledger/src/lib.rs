#![no_std]

//! # Swapper Ledger
//!
//! Fungible ledger backing the swapper's assets.
//!
//! Function names and argument order follow the Soroban token interface so
//! `token::Client` can drive it. On top of that it exposes `mint`,
//! `total_supply` and `admin`, which the swapper uses to run token C.
//!
//! ## Functions:
//! - Admin (3): initialize, mint, set_admin
//! - Write (5): approve, transfer, transfer_from, burn, burn_from
//! - Read (7): allowance, balance, total_supply, admin, decimals, name, symbol

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod error;
mod events;
mod storage;
mod types;

pub use error::{LedgerError, LedgerErrorMsg};
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct SwapLedger;

#[contractimpl]
impl SwapLedger {
    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Initialize ledger metadata and minting authority
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), LedgerError> {
        admin.require_auth();

        if has_admin(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }

        write_admin(&env, &admin);
        write_metadata(&env, &LedgerMetadata {
            decimals,
            name: name.clone(),
            symbol: symbol.clone(),
        });
        write_total_supply(&env, 0);

        emit_initialized(&env, &admin, &name, &symbol);

        Ok(())
    }

    /// Create `amount` new units for `to`
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), LedgerError> {
        let admin = read_admin(&env).ok_or(LedgerError::NotInitialized)?;
        admin.require_auth();

        check_nonnegative_amount(amount)?;

        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        write_balance(&env, &to, balance);
        write_total_supply(&env, supply);

        emit_transfer(&env, None, Some(to), amount);
        Ok(())
    }

    /// Hand minting authority to `new_admin`
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), LedgerError> {
        let admin = read_admin(&env).ok_or(LedgerError::NotInitialized)?;
        admin.require_auth();

        write_admin(&env, &new_admin);
        emit_admin_updated(&env, &admin, &new_admin);
        Ok(())
    }

    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Allow `spender` to move up to `amount` of `from`'s balance
    /// until `expiration_ledger` (inclusive)
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), LedgerError> {
        from.require_auth();

        check_nonnegative_amount(amount)?;
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(LedgerError::InvalidExpiration);
        }

        write_allowance(&env, &from, &spender, &AllowanceValue {
            amount,
            expiration_ledger,
        });

        emit_approval(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();

        check_nonnegative_amount(amount)?;
        move_balance(&env, &from, &to, amount)?;

        emit_transfer(&env, Some(from), Some(to), amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to`, consuming `spender`'s allowance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();

        check_nonnegative_amount(amount)?;
        let allowance = check_allowance(&env, &from, &spender, amount)?;
        move_balance(&env, &from, &to, amount)?;
        spend_allowance(&env, &from, &spender, &allowance, amount);

        emit_transfer(&env, Some(from), Some(to), amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();

        check_nonnegative_amount(amount)?;
        destroy(&env, &from, amount)?;

        emit_transfer(&env, Some(from), None, amount);
        Ok(())
    }

    /// Destroy `amount` of `from`'s balance, consuming `spender`'s allowance
    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();

        check_nonnegative_amount(amount)?;
        let allowance = check_allowance(&env, &from, &spender, amount)?;
        destroy(&env, &from, amount)?;
        spend_allowance(&env, &from, &spender, &allowance, amount);

        emit_transfer(&env, Some(from), None, amount);
        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn admin(env: Env) -> Result<Address, LedgerError> {
        read_admin(&env).ok_or(LedgerError::NotInitialized)
    }

    pub fn decimals(env: Env) -> Result<u32, LedgerError> {
        Ok(Self::metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, LedgerError> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, LedgerError> {
        Ok(Self::metadata(&env)?.symbol)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn metadata(env: &Env) -> Result<LedgerMetadata, LedgerError> {
        read_metadata(env).ok_or(LedgerError::NotInitialized)
    }
}

fn check_nonnegative_amount(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount);
    }
    Ok(())
}

fn check_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<AllowanceValue, LedgerError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(LedgerError::InsufficientAllowance);
    }
    Ok(allowance)
}

// Caller has already checked `allowance.amount >= amount`
fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    allowance: &AllowanceValue,
    amount: i128,
) {
    if amount > 0 {
        write_allowance(env, from, spender, &AllowanceValue {
            amount: allowance.amount - amount,
            expiration_ledger: allowance.expiration_ledger,
        });
    }
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, to_balance);
    Ok(())
}

fn destroy(env: &Env, from: &Address, amount: i128) -> Result<(), LedgerError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }

    write_balance(env, from, balance - amount);
    write_total_supply(env, read_total_supply(env) - amount);
    Ok(())
}
