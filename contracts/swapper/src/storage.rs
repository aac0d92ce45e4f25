//! Swapper storage operations

use soroban_sdk::{Address, Env};

use crate::error::SwapperError;
use crate::types::{DataKey, SwapStats, SwapperConfig};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &SwapperConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<SwapperConfig, SwapperError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(SwapperError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// CUSTODY
// ============================================================

/// Deposits minus withdrawals of `asset`
pub fn read_custody(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Custody(asset.clone()))
        .unwrap_or(0)
}

pub fn write_custody(env: &Env, asset: &Address, amount: i128) {
    let key = DataKey::Custody(asset.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

// ============================================================
// STATS
// ============================================================

pub fn read_stats(env: &Env) -> SwapStats {
    env.storage()
        .persistent()
        .get(&DataKey::Stats)
        .unwrap_or_default()
}

pub fn write_stats(env: &Env, stats: &SwapStats) {
    env.storage().persistent().set(&DataKey::Stats, stats);
    extend_ttl(env, &DataKey::Stats);
}
