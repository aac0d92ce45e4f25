// Conversion error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ConversionError {
    /// Price must be strictly positive
    InvalidPrice = 1,
    /// Amount must be strictly positive
    InvalidAmount = 2,
}
