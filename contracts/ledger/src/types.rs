//! Ledger type definitions

use soroban_sdk::{contracttype, Address, String};

// ============================================================
// METADATA
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

// ============================================================
// ALLOWANCE
// ============================================================

/// Spending allowance granted by an owner
///
/// Reads as zero once `expiration_ledger` has passed.
#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Minting authority
    Admin,
    /// Token metadata
    Metadata,
    /// Sum of all balances
    TotalSupply,
    /// Balance by holder
    Balance(Address),
    /// Allowance by (owner, spender)
    Allowance(Address, Address),
}
