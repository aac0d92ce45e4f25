//! Ledger storage operations

use soroban_sdk::{Address, Env};

use crate::types::{AllowanceValue, DataKey, LedgerMetadata};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// ADMIN
// ============================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    extend_ttl(env, &DataKey::Admin);
}

// ============================================================
// METADATA
// ============================================================

pub fn read_metadata(env: &Env) -> Option<LedgerMetadata> {
    env.storage().persistent().get(&DataKey::Metadata)
}

pub fn write_metadata(env: &Env, metadata: &LedgerMetadata) {
    env.storage().persistent().set(&DataKey::Metadata, metadata);
    extend_ttl(env, &DataKey::Metadata);
}

// ============================================================
// SUPPLY
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().persistent().set(&DataKey::TotalSupply, &supply);
    extend_ttl(env, &DataKey::TotalSupply);
}

// ============================================================
// BALANCES
// ============================================================

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            extend_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

// ============================================================
// ALLOWANCES
// ============================================================

/// Allowance still in force at the current ledger
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().persistent().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
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

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().persistent().set(&key, allowance);
    if allowance.amount > 0 {
        extend_ttl(env, &key);
    }
}
