// Swapper Conversion Package

#![no_std]

pub mod constants;
pub mod error;
pub mod price;

pub use constants::*;
pub use error::ConversionError;

// Re-export price arithmetic
pub use price::{
    validate_price,
    validate_amount,
    to_token_c,
    dust,
    quote_swap,
    quote_unswap,
    Conversion,
};
