#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, String, Symbol, TryFromVal, Val, Vec,
};
use swapper_engine::{Swapper, SwapperClient};
use swapper_ledger::{SwapLedger, SwapLedgerClient};

// Test constants
pub const DECIMALS: u32 = 18;
pub const EXPIRATION: u32 = 1_000;

/// `n` whole tokens at 18 decimals
pub fn units(n: i128) -> i128 {
    n * 10i128.pow(DECIMALS)
}

pub struct SwapperTest<'a> {
    pub env: Env,
    pub swapper: SwapperClient<'a>,
    pub admin: Address,
    pub token_a: SwapLedgerClient<'a>,
    pub token_b: SwapLedgerClient<'a>,
    pub token_c: SwapLedgerClient<'a>,
}

impl<'a> SwapperTest<'a> {
    /// Mint `amount` of `token` to `to` and approve the swapper for all of it
    pub fn fund(&self, token: &SwapLedgerClient<'a>, to: &Address, amount: i128) {
        token.mint(to, &amount);
        token.approve(to, &self.swapper.address, &amount, &EXPIRATION);
    }

    pub fn approve(&self, token: &SwapLedgerClient<'a>, from: &Address, amount: i128) {
        token.approve(from, &self.swapper.address, &amount, &EXPIRATION);
    }

    pub fn custody_of(&self, token: &SwapLedgerClient<'a>) -> i128 {
        self.swapper.get_custody(&token.address)
    }
}

/// Deploy tokens A, B, C and an initialized swapper at price 1
///
/// Token C's admin is the swapper, so only the swapper can mint it.
pub fn setup_swapper(env: &Env) -> SwapperTest<'_> {
    let admin = Address::generate(env);

    let swapper_id = env.register(Swapper, ());
    let swapper = SwapperClient::new(env, &swapper_id);

    let token_a = create_ledger(env, &admin, "MyTokenA", "MTA");
    let token_b = create_ledger(env, &admin, "MyTokenB", "MTB");
    let token_c = create_ledger(env, &swapper_id, "MyTokenC", "MTC");

    swapper.initialize(&admin, &token_a.address, &token_b.address, &token_c.address);

    SwapperTest {
        env: env.clone(),
        swapper,
        admin,
        token_a,
        token_b,
        token_c,
    }
}

pub fn create_ledger<'a>(env: &Env, admin: &Address, name: &str, symbol: &str) -> SwapLedgerClient<'a> {
    let ledger_id = env.register(SwapLedger, ());
    let client = SwapLedgerClient::new(env, &ledger_id);
    client.initialize(
        admin,
        &DECIMALS,
        &String::from_str(env, name),
        &String::from_str(env, symbol),
    );
    client
}

// ============================================================
// EVENTS
// ============================================================

/// Topics and data of the most recent event published by `contract`
///
/// Only covers the latest top-level invocation, so read it before making
/// any other client call.
pub fn last_event(env: &Env, contract: &Address) -> Option<(Vec<Val>, Val)> {
    let mut found = None;
    for (id, topics, data) in env.events().all().iter() {
        if &id == contract {
            found = Some((topics, data));
        }
    }
    found
}

pub fn event_name(env: &Env, topics: &Vec<Val>) -> Symbol {
    Symbol::try_from_val(env, &topics.get(0).unwrap()).unwrap()
}

/// Decoded `Swap` event: (caller, asset_in, amount_in, asset_out, amount_out)
pub fn last_swap_event(env: &Env, swapper: &Address) -> (Address, Address, i128, Address, i128) {
    let (topics, data) = last_event(env, swapper).expect("no swapper event");
    assert_eq!(event_name(env, &topics), Symbol::new(env, "Swap"));
    let caller = Address::try_from_val(env, &topics.get(1).unwrap()).unwrap();
    let (asset_in, amount_in, asset_out, amount_out) =
        <(Address, i128, Address, i128)>::try_from_val(env, &data).unwrap();
    (caller, asset_in, amount_in, asset_out, amount_out)
}

/// Price carried by the latest `NewPriceToken` event
pub fn last_price_event(env: &Env, swapper: &Address) -> i128 {
    let (topics, data) = last_event(env, swapper).expect("no swapper event");
    assert_eq!(event_name(env, &topics), Symbol::new(env, "NewPriceToken"));
    let (price,) = <(i128,)>::try_from_val(env, &data).unwrap();
    price
}

/// Decoded `Transfer` event from a ledger: (from, to, amount)
///
/// `None` marks the mint source or burn sink.
pub fn last_transfer(env: &Env, ledger: &Address) -> (Option<Address>, Option<Address>, i128) {
    let (topics, data) = last_event(env, ledger).expect("no ledger event");
    assert_eq!(event_name(env, &topics), Symbol::new(env, "Transfer"));
    let from = Option::<Address>::try_from_val(env, &topics.get(1).unwrap()).unwrap();
    let to = Option::<Address>::try_from_val(env, &topics.get(2).unwrap()).unwrap();
    let amount = i128::try_from_val(env, &data).unwrap();
    (from, to, amount)
}
