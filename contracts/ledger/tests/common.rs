#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, String, Symbol, TryFromVal, Val, Vec,
};
use swapper_ledger::{SwapLedger, SwapLedgerClient};

pub const DECIMALS: u32 = 18;

/// Register and initialize a ledger, returning the client and its admin
pub fn setup_ledger(env: &Env) -> (SwapLedgerClient<'_>, Address) {
    let admin = Address::generate(env);
    let client = create_ledger(env, &admin, "MyTokenA", "MTA");
    (client, admin)
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

/// Decoded `Transfer` event: (from, to, amount)
pub fn last_transfer(env: &Env, contract: &Address) -> (Option<Address>, Option<Address>, i128) {
    let (topics, data) = last_event(env, contract).expect("no event published");
    let name = Symbol::try_from_val(env, &topics.get(0).unwrap()).unwrap();
    assert_eq!(name, Symbol::new(env, "Transfer"));
    let from = Option::<Address>::try_from_val(env, &topics.get(1).unwrap()).unwrap();
    let to = Option::<Address>::try_from_val(env, &topics.get(2).unwrap()).unwrap();
    let amount = i128::try_from_val(env, &data).unwrap();
    (from, to, amount)
}
