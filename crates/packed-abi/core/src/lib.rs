// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type-descriptor driven codec for the packed (`encodePacked`) ABI layout.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod codec;
mod consts;
mod decode;
mod encode;
mod error;
mod kind;
mod numeric;
mod types;
mod value;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use codec::PackedCodec;
pub use consts::{DEFAULT_MAX_DEPTH, FUNCTION_LEN, MAX_FIXED_BYTES_LEN, MAX_INT_BITS};
pub use decode::{decode_packed, decode_packed_exact};
pub use encode::{encode_packed, encode_packed_into, encoded_len};
pub use error::{DescriptorError, Malformed, PackedError};
pub use kind::Kind;
pub use types::{AbiType, NativeInt, TupleElem};
pub use value::{NamedFields, Value};
