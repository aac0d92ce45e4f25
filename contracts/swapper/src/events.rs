//! Swapper events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the swapper is initialized
pub fn emit_initialized(
    env: &Env,
    admin: &Address,
    token_a: &Address,
    token_b: &Address,
    token_c: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "SwapperInit"),),
        (admin.clone(), token_a.clone(), token_b.clone(), token_c.clone()),
    );
}

/// Emitted by both swap and unswap
/// Topics: ("Swap", caller)
/// Data: (asset_in, amount_in, asset_out, amount_out)
///
/// swap:   (A|B, amount, C, minted)
/// unswap: (C, burned, A|B, amount)
pub fn emit_swap(
    env: &Env,
    caller: &Address,
    asset_in: &Address,
    amount_in: i128,
    asset_out: &Address,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), caller.clone()),
        (asset_in.clone(), amount_in, asset_out.clone(), amount_out),
    );
}

/// Emitted when the administrator changes the price
pub fn emit_new_price(env: &Env, new_price: i128) {
    env.events().publish(
        (Symbol::new(env, "NewPriceToken"),),
        (new_price,),
    );
}
