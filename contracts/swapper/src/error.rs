// Swapper error module

use soroban_sdk::contracterror;
use swapper_conversion::ConversionError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapperError {
    // Initialization errors (1-99)
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidTokenSet = 3,
    TokenCNotControlled = 4,

    // Swap errors (100-199)
    UnsupportedAsset = 100,
    InvalidAmount = 101,
    InsufficientAllowance = 102,
    InsufficientBalance = 103,
    InsufficientCustody = 104,

    // Price errors (200-299)
    InvalidPrice = 200,

    // Authorization errors (300-399)
    Unauthorized = 300,

    // Math errors (400-499)
    Overflow = 400,
}

impl From<ConversionError> for SwapperError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidPrice => SwapperError::InvalidPrice,
            ConversionError::InvalidAmount => SwapperError::InvalidAmount,
        }
    }
}

/// Human-readable error messages for debugging
pub struct SwapperErrorMsg;

impl SwapperErrorMsg {
    // Initialization
    pub const ALREADY_INITIALIZED: &'static str = "Swapper: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Swapper: not initialized";
    pub const INVALID_TOKEN_SET: &'static str = "Swapper: tokens A, B and C must be distinct";
    pub const TOKEN_C_NOT_CONTROLLED: &'static str = "Swapper: token C must be minted by the swapper and have no supply";

    // Swap
    pub const UNSUPPORTED_ASSET: &'static str = "Swapper: asset is neither token A nor token B";
    pub const INVALID_AMOUNT: &'static str = "Swapper: amount must be positive";
    pub const INSUFFICIENT_ALLOWANCE: &'static str = "Swapper: allowance to the swapper is too low";
    pub const INSUFFICIENT_BALANCE: &'static str = "Swapper: caller balance is too low";
    pub const INSUFFICIENT_CUSTODY: &'static str = "Swapper: custody balance does not cover the request";

    // Price
    pub const INVALID_PRICE: &'static str = "Swapper: price must be positive";

    // Authorization
    pub const UNAUTHORIZED: &'static str = "Swapper: caller is not the administrator";

    // Math
    pub const OVERFLOW: &'static str = "Swapper: arithmetic overflow";
}

impl SwapperError {
    pub fn message(&self) -> &'static str {
        match self {
            SwapperError::AlreadyInitialized => SwapperErrorMsg::ALREADY_INITIALIZED,
            SwapperError::NotInitialized => SwapperErrorMsg::NOT_INITIALIZED,
            SwapperError::InvalidTokenSet => SwapperErrorMsg::INVALID_TOKEN_SET,
            SwapperError::TokenCNotControlled => SwapperErrorMsg::TOKEN_C_NOT_CONTROLLED,
            SwapperError::UnsupportedAsset => SwapperErrorMsg::UNSUPPORTED_ASSET,
            SwapperError::InvalidAmount => SwapperErrorMsg::INVALID_AMOUNT,
            SwapperError::InsufficientAllowance => SwapperErrorMsg::INSUFFICIENT_ALLOWANCE,
            SwapperError::InsufficientBalance => SwapperErrorMsg::INSUFFICIENT_BALANCE,
            SwapperError::InsufficientCustody => SwapperErrorMsg::INSUFFICIENT_CUSTODY,
            SwapperError::InvalidPrice => SwapperErrorMsg::INVALID_PRICE,
            SwapperError::Unauthorized => SwapperErrorMsg::UNAUTHORIZED,
            SwapperError::Overflow => SwapperErrorMsg::OVERFLOW,
        }
    }
}
