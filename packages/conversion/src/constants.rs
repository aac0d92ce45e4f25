// SPDX-License-Identifier: MIT
// Conversion constants

/// Price in force right after the engine is initialized
pub const DEFAULT_PRICE: i128 = 1;

/// Smallest price the administrator may set
pub const MIN_PRICE: i128 = 1;

/// Smallest amount accepted by swap / unswap
pub const MIN_AMOUNT: i128 = 1;
