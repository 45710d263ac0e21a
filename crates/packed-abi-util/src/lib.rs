// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex and address helpers shared by the packed-abi crates.
//!
//! - [`decode_hex`] / [`encode_hex`]: hex strings with an optional `0x` prefix
//! - [`Address`]: 20-byte account address with textual parse/format
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod address;
mod error;
mod hex_codec;

pub use address::{Address, ADDRESS_LEN};
pub use error::{AddressError, HexError};
pub use hex_codec::{decode_hex, encode_hex, strip_hex_prefix};
