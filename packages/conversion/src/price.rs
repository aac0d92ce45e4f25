// SPDX-License-Identifier: MIT
// Integer price conversion between custodied assets and token C
//
// Both directions use the same floor division. On swap the remainder stays
// in custody with no C minted for it; on unswap the caller burns only the
// floored amount of C for the full amount requested.

use soroban_sdk::contracttype;

use crate::constants::{MIN_AMOUNT, MIN_PRICE};
use crate::error::ConversionError;

/// Result of converting an asset amount at a given price
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conversion {
    /// Amount of asset A/B moved
    pub amount: i128,
    /// Amount of token C minted or burned
    pub token_c: i128,
    /// Remainder not covered by token C (amount mod price)
    pub dust: i128,
    /// Price the conversion was computed at
    pub price: i128,
}

#[inline]
pub fn validate_price(price: i128) -> Result<(), ConversionError> {
    if price < MIN_PRICE {
        return Err(ConversionError::InvalidPrice);
    }
    Ok(())
}

#[inline]
pub fn validate_amount(amount: i128) -> Result<(), ConversionError> {
    if amount < MIN_AMOUNT {
        return Err(ConversionError::InvalidAmount);
    }
    Ok(())
}

/// floor(amount / price)
///
/// Both operands are validated positive, so truncation toward zero and
/// floor coincide.
pub fn to_token_c(amount: i128, price: i128) -> Result<i128, ConversionError> {
    validate_price(price)?;
    validate_amount(amount)?;
    Ok(amount / price)
}

/// amount mod price, the part of `amount` that buys no token C
pub fn dust(amount: i128, price: i128) -> Result<i128, ConversionError> {
    validate_price(price)?;
    validate_amount(amount)?;
    Ok(amount % price)
}

/// Quote for depositing `amount` of A/B
pub fn quote_swap(amount: i128, price: i128) -> Result<Conversion, ConversionError> {
    convert(amount, price)
}

/// Quote for withdrawing `amount` of A/B
pub fn quote_unswap(amount: i128, price: i128) -> Result<Conversion, ConversionError> {
    convert(amount, price)
}

fn convert(amount: i128, price: i128) -> Result<Conversion, ConversionError> {
    let token_c = to_token_c(amount, price)?;
    Ok(Conversion {
        amount,
        token_c,
        dust: amount % price,
        price,
    })
}
