// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type descriptors.
//!
//! An [`AbiType`] is built once through its validating constructors and is
//! read-only afterwards. Encoding and decoding only ever borrow it, so a
//! descriptor can be shared across threads freely.
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use packed_abi_util::ADDRESS_LEN;

use crate::consts::{FUNCTION_LEN, MAX_FIXED_BYTES_LEN, MAX_INT_BITS};
use crate::error::DescriptorError;
use crate::kind::Kind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Repr {
    Slice(Box<AbiType>),
    Array(Box<AbiType>, usize),
    Tuple(Vec<TupleElem>),
    String,
    Bool,
    Address,
    Int(usize),
    UInt(usize),
    Bytes,
    FixedBytes(usize),
    Function,
}

/// Immutable description of an ABI type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbiType {
    repr: Repr,
}

/// A named tuple member. An empty name falls back to the member's position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleElem {
    pub name: String,
    pub elem: AbiType,
}

impl TupleElem {
    pub fn new(name: impl Into<String>, elem: AbiType) -> Self {
        Self {
            name: name.into(),
            elem,
        }
    }

    pub fn unnamed(elem: AbiType) -> Self {
        Self::new(String::new(), elem)
    }

    /// Key under which the member at `index` is looked up and reported.
    pub fn key(&self, index: usize) -> Cow<'_, str> {
        if self.name.is_empty() {
            Cow::Owned(index.to_string())
        } else {
            Cow::Borrowed(self.name.as_str())
        }
    }
}

/// Native representation a decoded integer is rebuilt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeInt {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    /// Any other unsigned width, held in 256 bits.
    U256,
    /// Any other signed width, held in 256 bits.
    I256,
}

#[inline(always)]
fn check_int_width(bits: usize) -> Result<usize, DescriptorError> {
    if bits == 0 || bits > MAX_INT_BITS || bits % 8 != 0 {
        return Err(DescriptorError::InvalidIntWidth(bits));
    }

    Ok(bits)
}

impl AbiType {
    #[inline(always)]
    const fn from_repr(repr: Repr) -> Self {
        Self { repr }
    }

    pub const fn bool() -> Self {
        Self::from_repr(Repr::Bool)
    }

    pub const fn string() -> Self {
        Self::from_repr(Repr::String)
    }

    pub const fn bytes() -> Self {
        Self::from_repr(Repr::Bytes)
    }

    pub const fn address() -> Self {
        Self::from_repr(Repr::Address)
    }

    pub const fn function() -> Self {
        Self::from_repr(Repr::Function)
    }

    /// `uintN`; `bits` must be a multiple of 8 in `8..=256`.
    pub fn uint(bits: usize) -> Result<Self, DescriptorError> {
        Ok(Self::from_repr(Repr::UInt(check_int_width(bits)?)))
    }

    /// `intN`; `bits` must be a multiple of 8 in `8..=256`.
    pub fn int(bits: usize) -> Result<Self, DescriptorError> {
        Ok(Self::from_repr(Repr::Int(check_int_width(bits)?)))
    }

    /// `bytesN`; `len` is a byte count in `1..=32`.
    pub fn fixed_bytes(len: usize) -> Result<Self, DescriptorError> {
        if len == 0 || len > MAX_FIXED_BYTES_LEN {
            return Err(DescriptorError::InvalidFixedBytesLen(len));
        }

        Ok(Self::from_repr(Repr::FixedBytes(len)))
    }

    /// `elem[len]`
    pub fn array(elem: AbiType, len: usize) -> Self {
        Self::from_repr(Repr::Array(Box::new(elem), len))
    }

    /// `elem[]`
    pub fn slice(elem: AbiType) -> Self {
        Self::from_repr(Repr::Slice(Box::new(elem)))
    }

    pub fn tuple(elems: impl IntoIterator<Item = TupleElem>) -> Self {
        Self::from_repr(Repr::Tuple(elems.into_iter().collect()))
    }

    #[inline(always)]
    pub(crate) fn repr(&self) -> &Repr {
        &self.repr
    }

    pub fn kind(&self) -> Kind {
        match self.repr {
            Repr::Slice(_) => Kind::Slice,
            Repr::Array(..) => Kind::Array,
            Repr::Tuple(_) => Kind::Tuple,
            Repr::String => Kind::String,
            Repr::Bool => Kind::Bool,
            Repr::Address => Kind::Address,
            Repr::Int(_) => Kind::Int,
            Repr::UInt(_) => Kind::UInt,
            Repr::Bytes => Kind::Bytes,
            Repr::FixedBytes(_) => Kind::FixedBytes,
            Repr::Function => Kind::Function,
        }
    }

    /// Declared size: bit-width for `intN`/`uintN`, byte length for `bytesN`,
    /// address and function, element count for fixed arrays, `0` otherwise.
    pub fn size(&self) -> usize {
        match self.repr {
            Repr::Int(bits) | Repr::UInt(bits) => bits,
            Repr::FixedBytes(len) | Repr::Array(_, len) => len,
            Repr::Address => ADDRESS_LEN,
            Repr::Function => FUNCTION_LEN,
            Repr::Slice(_) | Repr::Tuple(_) | Repr::String | Repr::Bool | Repr::Bytes => 0,
        }
    }

    /// Element descriptor of arrays and slices.
    pub fn elem(&self) -> Option<&AbiType> {
        match &self.repr {
            Repr::Slice(elem) | Repr::Array(elem, _) => Some(elem),
            _ => None,
        }
    }

    /// Members of a tuple, empty for every other kind.
    pub fn tuple_elems(&self) -> &[TupleElem] {
        match &self.repr {
            Repr::Tuple(elems) => elems,
            _ => &[],
        }
    }

    pub fn native_int(&self) -> Option<NativeInt> {
        let native = match self.repr {
            Repr::UInt(8) => NativeInt::U8,
            Repr::UInt(16) => NativeInt::U16,
            Repr::UInt(32) => NativeInt::U32,
            Repr::UInt(64) => NativeInt::U64,
            Repr::UInt(_) => NativeInt::U256,
            Repr::Int(8) => NativeInt::I8,
            Repr::Int(16) => NativeInt::I16,
            Repr::Int(32) => NativeInt::I32,
            Repr::Int(64) => NativeInt::I64,
            Repr::Int(_) => NativeInt::I256,
            _ => return None,
        };

        Some(native)
    }

    /// Packed byte length when it does not depend on the value.
    ///
    /// `None` for `string`, `bytes`, slices, and any array or tuple that
    /// contains one of them. The walk is unbounded; decoding goes through a
    /// depth-limited equivalent on [`PackedCodec`](crate::PackedCodec).
    pub fn static_len(&self) -> Option<usize> {
        match &self.repr {
            Repr::Bool => Some(1),
            Repr::Int(bits) | Repr::UInt(bits) => Some(bits / 8),
            Repr::Address => Some(ADDRESS_LEN),
            Repr::Function => Some(FUNCTION_LEN),
            Repr::FixedBytes(len) => Some(*len),
            Repr::Array(elem, len) => elem.static_len()?.checked_mul(*len),
            Repr::Tuple(elems) => elems
                .iter()
                .try_fold(0usize, |acc, e| acc.checked_add(e.elem.static_len()?)),
            Repr::Slice(_) | Repr::String | Repr::Bytes => None,
        }
    }
}
