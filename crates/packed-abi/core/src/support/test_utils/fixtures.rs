// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Descriptor and value fixtures for packed-abi tests.
use alloc::vec;

use packed_abi_util::Address;

use crate::types::{AbiType, TupleElem};
use crate::value::Value;

/// Address used across fixtures: bytes `0x01..=0x14`.
pub const SAMPLE_ADDRESS: Address = Address::new([
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14,
]);

/// Textual form of [`SAMPLE_ADDRESS`].
pub const SAMPLE_ADDRESS_HEX: &str = "0x0102030405060708090a0b0c0d0e0f1011121314";

/// `uintN`, panicking on an invalid width.
pub fn uint(bits: usize) -> AbiType {
    AbiType::uint(bits).expect("Failed to build uint descriptor")
}

/// `intN`, panicking on an invalid width.
pub fn int(bits: usize) -> AbiType {
    AbiType::int(bits).expect("Failed to build int descriptor")
}

/// `bytesN`, panicking on an invalid length.
pub fn bytes_n(len: usize) -> AbiType {
    AbiType::fixed_bytes(len).expect("Failed to build fixed bytes descriptor")
}

/// `(address to, uint256 amount, string memo)`; `memo` is dynamic and last.
pub fn transfer_type() -> AbiType {
    AbiType::tuple([
        TupleElem::new("to", AbiType::address()),
        TupleElem::new("amount", uint(256)),
        TupleElem::new("memo", AbiType::string()),
    ])
}

/// Slice nested `levels` times around `bool`, so `levels + 1` descriptor
/// levels in total.
pub fn nested_slice_type(levels: usize) -> AbiType {
    (0..levels).fold(AbiType::bool(), |inner, _| AbiType::slice(inner))
}

/// Value matching [`nested_slice_type`] with one `true` at the bottom.
pub fn nested_slice_value(levels: usize) -> Value {
    (0..levels).fold(Value::Bool(true), |inner, _| Value::Array(vec![inner]))
}
