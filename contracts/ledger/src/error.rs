// Ledger error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Initialization errors (1-9)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Amount errors (10-19)
    NegativeAmount = 10,
    Overflow = 11,

    // Balance errors (20-29)
    InsufficientBalance = 20,
    InsufficientAllowance = 21,
    InvalidExpiration = 22,
}

/// Human-readable error messages for debugging
pub struct LedgerErrorMsg;

impl LedgerErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Ledger: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Ledger: not initialized";
    pub const NEGATIVE_AMOUNT: &'static str = "Ledger: amount must not be negative";
    pub const OVERFLOW: &'static str = "Ledger: arithmetic overflow";
    pub const INSUFFICIENT_BALANCE: &'static str = "Ledger: transfer amount exceeds balance";
    pub const INSUFFICIENT_ALLOWANCE: &'static str = "Ledger: insufficient allowance";
    pub const INVALID_EXPIRATION: &'static str = "Ledger: expiration ledger is in the past";
}

impl LedgerError {
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::AlreadyInitialized => LedgerErrorMsg::ALREADY_INITIALIZED,
            LedgerError::NotInitialized => LedgerErrorMsg::NOT_INITIALIZED,
            LedgerError::NegativeAmount => LedgerErrorMsg::NEGATIVE_AMOUNT,
            LedgerError::Overflow => LedgerErrorMsg::OVERFLOW,
            LedgerError::InsufficientBalance => LedgerErrorMsg::INSUFFICIENT_BALANCE,
            LedgerError::InsufficientAllowance => LedgerErrorMsg::INSUFFICIENT_ALLOWANCE,
            LedgerError::InvalidExpiration => LedgerErrorMsg::INVALID_EXPIRATION,
        }
    }
}
