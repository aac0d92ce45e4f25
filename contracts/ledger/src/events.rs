//! Ledger events
//!
//! `Transfer` follows the fungible-asset convention: mint has no origin,
//! burn has no destination, so balances can be rebuilt from the log alone.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emitted when the ledger is initialized
pub fn emit_initialized(env: &Env, admin: &Address, name: &String, symbol: &String) {
    env.events().publish(
        (Symbol::new(env, "LedgerInit"),),
        (admin.clone(), name.clone(), symbol.clone()),
    );
}

/// Emitted on every balance movement
/// Topics: ("Transfer", from, to)   from = None on mint, to = None on burn
/// Data: amount
pub fn emit_transfer(env: &Env, from: Option<Address>, to: Option<Address>, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Transfer"), from, to),
        amount,
    );
}

/// Emitted when an allowance is set
/// Topics: ("Approval", owner, spender)
/// Data: (amount, expiration_ledger)
pub fn emit_approval(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    env.events().publish(
        (Symbol::new(env, "Approval"), owner.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

/// Emitted when minting authority moves
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
