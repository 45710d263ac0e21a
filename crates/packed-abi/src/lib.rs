// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Packed Ethereum ABI codec.
//!
//! Values are laid out back to back with no offsets, length prefixes or
//! word alignment, the same bytes `abi.encodePacked` produces. The layout is
//! driven by an [`AbiType`] built at runtime, so the same codec serves any
//! shape a caller can describe.
//!
//! - Integers are big-endian and left-padded to their declared width.
//! - `bytesN` and function values are right-padded.
//! - `string`, `bytes` and slices carry no length, so on decode they take
//!   every byte that is left.
//!
//! # Quick Start
//!
//! ```rust
//! use packed_abi::{AbiType, TupleElem, Value, decode_packed_exact, encode_packed};
//! use packed_abi::util::Address;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ty = AbiType::tuple([
//!         TupleElem::new("to", AbiType::address()),
//!         TupleElem::new("amount", AbiType::uint(16)?),
//!         TupleElem::new("memo", AbiType::string()),
//!     ]);
//!
//!     let value = Value::Tuple(vec![
//!         ("to".into(), Value::Address(Address::new([0x11; 20]))),
//!         ("amount".into(), Value::U16(0x0102)),
//!         ("memo".into(), "hi".into()),
//!     ]);
//!
//!     let bytes = encode_packed(&value, &ty)?;
//!     assert_eq!(bytes.len(), 20 + 2 + 2);
//!     assert_eq!(&bytes[20..], &[0x01, 0x02, b'h', b'i']);
//!
//!     assert_eq!(decode_packed_exact(&ty, &bytes)?, value);
//!     Ok(())
//! }
//! ```
//!
//! # Nesting
//!
//! Descriptors may nest arbitrarily, but a [`PackedCodec`] refuses to go
//! deeper than its configured limit ([`DEFAULT_MAX_DEPTH`] by default) and
//! reports [`PackedError::DepthLimitExceeded`] instead of exhausting the
//! stack.
#![cfg_attr(not(test), no_std)]

pub use packed_abi_core::*;
pub use packed_abi_util as util;
pub use packed_abi_util::Address;
