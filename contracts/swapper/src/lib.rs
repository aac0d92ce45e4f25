#![no_std]

//! # Swapper
//!
//! Fixed-price converter between two custodied assets (A, B) and a
//! synthetic asset (C) that only the swapper can mint or burn.
//!
//! ## Responsibilities:
//! 1. Custody of A and B deposited through `swap`
//! 2. Minting / burning C at `floor(amount / price)`
//! 3. Administrator-controlled integer price
//!
//! ## Functions:
//! - Write (4): initialize, swap, unswap, set_price
//! - Read (10): get_address_token_c, get_price_token_c, get_token_a,
//!   get_token_b, get_admin, get_config, get_custody, get_stats,
//!   preview_swap, preview_unswap
//!
//! Every check runs before the first token movement, so a rejected call
//! leaves balances, custody and supply exactly as they were.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use swapper_conversion::{quote_swap, quote_unswap, validate_amount, validate_price, DEFAULT_PRICE};

mod error;
mod events;
mod ledger;
mod storage;
mod types;

pub use error::{SwapperError, SwapperErrorMsg};
use events::*;
pub use ledger::MintableLedgerClient;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct Swapper;

#[contractimpl]
impl Swapper {
    // ========================================================
    // WRITE FUNCTIONS (4)
    // ========================================================

    /// Initialize swapper
    ///
    /// # Arguments
    /// * `admin` - Only identity allowed to call `set_price`
    /// * `token_a` - First custodied asset
    /// * `token_b` - Second custodied asset
    /// * `token_c` - Ledger whose admin is this contract, with zero supply
    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        token_c: Address,
    ) -> Result<(), SwapperError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(SwapperError::AlreadyInitialized);
        }

        if token_a == token_b || token_a == token_c || token_b == token_c {
            return Err(SwapperError::InvalidTokenSet);
        }

        if !Self::controls_token_c(&env, &token_c) {
            return Err(SwapperError::TokenCNotControlled);
        }

        let config = SwapperConfig {
            admin: admin.clone(),
            token_a: token_a.clone(),
            token_b: token_b.clone(),
            token_c: token_c.clone(),
            price_c: DEFAULT_PRICE,
        };
        write_config(&env, &config);
        write_stats(&env, &SwapStats::default());
        set_initialized(&env);

        emit_initialized(&env, &admin, &token_a, &token_b, &token_c);

        Ok(())
    }

    /// Deposit `amount` of A or B and receive `floor(amount / price)` of C
    ///
    /// The caller must have approved this contract for at least `amount`
    /// on `asset`. The remainder `amount % price` stays in custody with no
    /// C minted for it.
    pub fn swap(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, SwapperError> {
        caller.require_auth();

        let config = read_config(&env)?;
        Self::check_supported(&config, &asset)?;
        validate_amount(amount)?;

        let this = env.current_contract_address();
        let asset_client = token::Client::new(&env, &asset);

        if asset_client.allowance(&caller, &this) < amount {
            return Err(SwapperError::InsufficientAllowance);
        }
        if asset_client.balance(&caller) < amount {
            return Err(SwapperError::InsufficientBalance);
        }

        let quote = quote_swap(amount, config.price_c)?;
        let minted = quote.token_c;

        let custody = read_custody(&env, &asset)
            .checked_add(amount)
            .ok_or(SwapperError::Overflow)?;
        let mut stats = read_stats(&env);
        stats.swap_count = stats
            .swap_count
            .checked_add(1)
            .ok_or(SwapperError::Overflow)?;
        stats.total_c_minted = stats
            .total_c_minted
            .checked_add(minted)
            .ok_or(SwapperError::Overflow)?;

        // === MOVE TOKENS ===
        asset_client.transfer_from(&this, &caller, &this, &amount);
        if minted > 0 {
            MintableLedgerClient::new(&env, &config.token_c).mint(&caller, &minted);
        }

        write_custody(&env, &asset, custody);
        write_stats(&env, &stats);

        log!(&env, "swap", amount, config.price_c, minted, quote.dust);
        emit_swap(&env, &caller, &asset, amount, &config.token_c, minted);

        Ok(minted)
    }

    /// Withdraw `amount` of A or B from custody, burning
    /// `floor(amount / price)` of the caller's C
    ///
    /// The caller must have approved this contract for the burned amount
    /// on token C.
    ///
    /// A request below the current price burns 0 C and needs no C
    /// allowance or balance, so any caller can withdraw custody in steps
    /// of at most `price - 1`. Custody is pooled, not tracked per depositor.
    pub fn unswap(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, SwapperError> {
        caller.require_auth();

        let config = read_config(&env)?;
        Self::check_supported(&config, &asset)?;
        validate_amount(amount)?;

        let custody = read_custody(&env, &asset);
        if custody < amount {
            return Err(SwapperError::InsufficientCustody);
        }

        let quote = quote_unswap(amount, config.price_c)?;
        let burned = quote.token_c;

        let this = env.current_contract_address();
        let token_c_client = token::Client::new(&env, &config.token_c);

        if token_c_client.allowance(&caller, &this) < burned {
            return Err(SwapperError::InsufficientAllowance);
        }
        if token_c_client.balance(&caller) < burned {
            return Err(SwapperError::InsufficientBalance);
        }

        let mut stats = read_stats(&env);
        stats.unswap_count = stats
            .unswap_count
            .checked_add(1)
            .ok_or(SwapperError::Overflow)?;
        stats.total_c_burned = stats
            .total_c_burned
            .checked_add(burned)
            .ok_or(SwapperError::Overflow)?;

        // === MOVE TOKENS ===
        if burned > 0 {
            token_c_client.burn_from(&this, &caller, &burned);
        }
        token::Client::new(&env, &asset).transfer(&this, &caller, &amount);

        write_custody(&env, &asset, custody - amount);
        write_stats(&env, &stats);

        log!(&env, "unswap", amount, config.price_c, burned, quote.dust);
        emit_swap(&env, &caller, &config.token_c, burned, &asset, amount);

        Ok(burned)
    }

    /// Replace the price of token C (administrator only)
    ///
    /// Only affects later swaps and unswaps.
    pub fn set_price(env: Env, caller: Address, new_price: i128) -> Result<(), SwapperError> {
        caller.require_auth();

        let mut config = read_config(&env)?;
        if caller != config.admin {
            return Err(SwapperError::Unauthorized);
        }

        validate_price(new_price)?;

        config.price_c = new_price;
        write_config(&env, &config);

        emit_new_price(&env, new_price);

        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Address of the synthetic asset
    pub fn get_address_token_c(env: Env) -> Result<Address, SwapperError> {
        Ok(read_config(&env)?.token_c)
    }

    /// Units of A/B per unit of C
    pub fn get_price_token_c(env: Env) -> Result<i128, SwapperError> {
        Ok(read_config(&env)?.price_c)
    }

    pub fn get_token_a(env: Env) -> Result<Address, SwapperError> {
        Ok(read_config(&env)?.token_a)
    }

    pub fn get_token_b(env: Env) -> Result<Address, SwapperError> {
        Ok(read_config(&env)?.token_b)
    }

    pub fn get_admin(env: Env) -> Result<Address, SwapperError> {
        Ok(read_config(&env)?.admin)
    }

    pub fn get_config(env: Env) -> Result<SwapperConfig, SwapperError> {
        read_config(&env)
    }

    /// Custodied balance of `asset` (0 for anything other than A or B)
    pub fn get_custody(env: Env, asset: Address) -> i128 {
        read_custody(&env, &asset)
    }

    pub fn get_stats(env: Env) -> SwapStats {
        read_stats(&env)
    }

    /// Quote `swap(asset, amount)` at the current price without executing
    pub fn preview_swap(env: Env, asset: Address, amount: i128) -> Result<Conversion, SwapperError> {
        let config = read_config(&env)?;
        Self::check_supported(&config, &asset)?;
        Ok(quote_swap(amount, config.price_c)?)
    }

    /// Quote `unswap(asset, amount)` at the current price without executing
    pub fn preview_unswap(env: Env, asset: Address, amount: i128) -> Result<Conversion, SwapperError> {
        let config = read_config(&env)?;
        Self::check_supported(&config, &asset)?;
        let quote = quote_unswap(amount, config.price_c)?;
        if read_custody(&env, &asset) < amount {
            return Err(SwapperError::InsufficientCustody);
        }
        Ok(quote)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn check_supported(config: &SwapperConfig, asset: &Address) -> Result<(), SwapperError> {
        if *asset == config.token_a || *asset == config.token_b {
            Ok(())
        } else {
            Err(SwapperError::UnsupportedAsset)
        }
    }

    /// Token C must answer the ledger interface, name this contract as its
    /// minter and start empty
    fn controls_token_c(env: &Env, token_c: &Address) -> bool {
        let client = MintableLedgerClient::new(env, token_c);
        let this = env.current_contract_address();

        let admin_ok = matches!(client.try_admin(), Ok(Ok(admin)) if admin == this);
        let supply_ok = matches!(client.try_total_supply(), Ok(Ok(0)));

        admin_ok && supply_ok
    }
}
