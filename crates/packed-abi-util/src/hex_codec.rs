// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::HexError;

/// Returns `s` without a leading `0x` / `0X`.
#[inline(always)]
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes a hex string into bytes. The `0x` prefix is optional and an empty
/// digit string decodes to an empty vector.
///
/// # Example
///
/// ```rust
/// use packed_abi_util::decode_hex;
///
/// assert_eq!(decode_hex("0xdead").unwrap(), vec![0xde, 0xad]);
/// assert_eq!(decode_hex("BEEF").unwrap(), vec![0xbe, 0xef]);
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = strip_hex_prefix(s);

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    hex::decode(digits).map_err(HexError::from)
}

/// Encodes bytes as `0x` followed by lowercase hex digits.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    out.push_str(&hex::encode(bytes));
    out
}
