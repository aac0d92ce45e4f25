// Property-Based Testing with Proptest
// Run with: cargo test -p swapper-engine --test test_proptest

mod common;

use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

const START_BALANCE: i128 = 1_000_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: swap moves exactly `amount` into custody and mints floor(amount / price)
    #[test]
    fn prop_swap_credits_custody_and_mints_floor(
        amount in 1i128..START_BALANCE,
        price in 1i128..10_000i128
    ) {
        let env = Env::default();
        env.mock_all_auths();
        let t = common::setup_swapper(&env);
        let user = Address::generate(&env);
        t.fund(&t.token_a, &user, START_BALANCE);
        t.swapper.set_price(&t.admin, &price);

        let minted = t.swapper.swap(&user, &t.token_a.address, &amount);

        prop_assert_eq!(minted, amount / price);
        prop_assert_eq!(t.custody_of(&t.token_a), amount);
        prop_assert_eq!(t.token_a.balance(&user), START_BALANCE - amount);
        prop_assert_eq!(t.token_c.balance(&user), amount / price);
    }

    /// Property: after any mix of swaps and unswaps, C supply equals
    /// minted minus burned and A/B are conserved between holder and custody
    #[test]
    fn prop_conservation(
        ops in prop::collection::vec((any::<bool>(), any::<bool>(), 1i128..5_000, 1i128..20), 1..12)
    ) {
        let env = Env::default();
        env.mock_all_auths();
        let t = common::setup_swapper(&env);
        let user = Address::generate(&env);
        t.fund(&t.token_a, &user, START_BALANCE);
        t.fund(&t.token_b, &user, START_BALANCE);
        t.approve(&t.token_c, &user, START_BALANCE);

        let mut minted_total = 0i128;
        let mut burned_total = 0i128;

        for (use_a, is_swap, amount, price) in ops {
            t.swapper.set_price(&t.admin, &price);
            let token = if use_a { &t.token_a } else { &t.token_b };

            let needed_c = amount / price;
            let can_unswap = t.custody_of(token) >= amount
                && t.token_c.balance(&user) >= needed_c;

            if is_swap || !can_unswap {
                minted_total += t.swapper.swap(&user, &token.address, &amount);
            } else {
                burned_total += t.swapper.unswap(&user, &token.address, &amount);
            }

            prop_assert_eq!(t.token_c.total_supply(), minted_total - burned_total);
        }

        let stats = t.swapper.get_stats();
        prop_assert_eq!(stats.total_c_minted, minted_total);
        prop_assert_eq!(stats.total_c_burned, burned_total);
        prop_assert_eq!(t.token_a.balance(&user) + t.custody_of(&t.token_a), START_BALANCE);
        prop_assert_eq!(t.token_b.balance(&user) + t.custody_of(&t.token_b), START_BALANCE);
        prop_assert_eq!(t.token_a.balance(&t.swapper.address), t.custody_of(&t.token_a));
    }
}
