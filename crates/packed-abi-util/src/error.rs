// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for packed-abi-util.
use thiserror::Error;

use crate::address::ADDRESS_LEN;

/// Errors produced while decoding hex text.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HexError {
    /// The digit count (after the optional prefix) is odd.
    #[error("odd number of hex digits")]
    OddLength,

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {c:?} at index {index}")]
    InvalidCharacter {
        /// Offending character.
        c: char,
        /// Position after the optional prefix.
        index: usize,
    },
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Self::InvalidCharacter { c, index }
            }
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                Self::OddLength
            }
        }
    }
}

/// Errors produced while building an [`Address`](crate::Address).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AddressError {
    /// Input did not hold exactly 20 bytes.
    #[error("address must be {ADDRESS_LEN} bytes, got {0}")]
    InvalidLength(usize),

    /// Textual input was not valid hex.
    #[error("invalid address hex: {0}")]
    Hex(#[from] HexError),
}
