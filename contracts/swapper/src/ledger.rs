//! Ledger capability used for token C
//!
//! Transfers, burns, balances and allowances go through the standard
//! `token::Client`. Minting and supply are not part of that interface, so
//! token C must also implement this one.

use soroban_sdk::{contractclient, Address, Env};

#[allow(dead_code)]
#[contractclient(name = "MintableLedgerClient")]
pub trait MintableLedger {
    /// Current minting authority
    fn admin(env: Env) -> Address;

    fn total_supply(env: Env) -> i128;

    /// Requires the admin's authorization
    fn mint(env: Env, to: Address, amount: i128);
}
