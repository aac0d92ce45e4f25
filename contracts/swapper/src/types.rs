//! Swapper type definitions

use soroban_sdk::{contracttype, Address};

pub use swapper_conversion::Conversion;

// ============================================================
// SWAPPER CONFIG
// ============================================================

/// Swapper configuration
///
/// `admin` and the three token addresses are fixed at initialization;
/// only `price_c` changes afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapperConfig {
    /// Only identity allowed to change the price
    pub admin: Address,
    /// First custodied asset
    pub token_a: Address,
    /// Second custodied asset
    pub token_b: Address,
    /// Synthetic asset minted and burned by the swapper
    pub token_c: Address,
    /// Units of A/B per unit of C
    pub price_c: i128,
}

// ============================================================
// SWAP STATS
// ============================================================

/// Running totals over all completed swaps and unswaps
///
/// `total_c_minted - total_c_burned` always equals token C's supply.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapStats {
    pub swap_count: u32,
    pub unswap_count: u32,
    pub total_c_minted: i128,
    pub total_c_burned: i128,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Swapper config
    Config,
    /// Initialization flag
    Initialized,
    /// Custody balance by asset
    Custody(Address),
    /// Swap statistics
    Stats,
}
