// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 20-byte account address.
use core::fmt;
use core::str::FromStr;

use crate::error::AddressError;
use crate::hex_codec::decode_hex;

/// Byte length of an address.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address.
///
/// Parses from 40 hex digits with an optional `0x` prefix and formats as `0x`
/// followed by lowercase hex.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Wraps raw bytes.
    #[inline(always)]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Copies an address out of a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;

        Ok(Self(array))
    }

    /// Borrows the raw bytes.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns the raw bytes.
    #[inline(always)]
    pub fn into_bytes(self) -> [u8; ADDRESS_LEN] {
        self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_hex(s)?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
