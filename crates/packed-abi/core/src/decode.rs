// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Packed decoder.
//!
//! Packed data carries no length markers, so `string`, `bytes` and slices
//! consume everything left in the buffer. Such a member has to be the last
//! one of any tuple it appears in.
use alloc::string::String;
use alloc::vec::Vec;

use packed_abi_util::{Address, ADDRESS_LEN};

use crate::codec::PackedCodec;
use crate::consts::FUNCTION_LEN;
use crate::error::{Malformed, PackedError};
use crate::kind::Kind;
use crate::numeric::read_int;
use crate::types::{AbiType, NativeInt, Repr, TupleElem};
use crate::value::Value;

type Decoded<'a> = Result<(Value, &'a [u8]), PackedError>;

/// Splits `len` bytes off the front of `buf`.
#[inline(always)]
fn take(kind: Kind, buf: &[u8], len: usize) -> Result<(&[u8], &[u8]), PackedError> {
    if len > buf.len() {
        return Err(PackedError::BufferUnderrun {
            kind,
            required: len,
            remaining: buf.len(),
        });
    }

    Ok(buf.split_at(len))
}

/// Fails early when `ty` has a static length longer than `buf`.
#[inline(always)]
fn ensure_prefix(kind: Kind, required: Option<usize>, buf: &[u8]) -> Result<(), PackedError> {
    match required {
        Some(required) if required > buf.len() => Err(PackedError::BufferUnderrun {
            kind,
            required,
            remaining: buf.len(),
        }),
        _ => Ok(()),
    }
}

pub(crate) struct Decoder<'c> {
    codec: &'c PackedCodec,
}

impl<'c> Decoder<'c> {
    pub(crate) fn new(codec: &'c PackedCodec) -> Self {
        Self { codec }
    }

    pub(crate) fn decode_top<'a>(&self, ty: &AbiType, buf: &'a [u8]) -> Decoded<'a> {
        if buf.is_empty() {
            let depth = self.codec.enter(0)?;
            let required = self.codec.static_len_at(ty, depth)?.unwrap_or(1).max(1);

            return Err(PackedError::BufferUnderrun {
                kind: ty.kind(),
                required,
                remaining: 0,
            });
        }

        self.decode(ty, buf, 0)
    }

    /// Unpacks `ty` from the front of `buf`; `depth` is the nesting level of
    /// the caller.
    fn decode<'a>(&self, ty: &AbiType, buf: &'a [u8], depth: usize) -> Decoded<'a> {
        let depth = self.codec.enter(depth)?;

        match ty.repr() {
            Repr::Slice(elem) => self.decode_slice(elem, buf, depth),
            Repr::Array(elem, len) => self.decode_array(ty, elem, *len, buf, depth),
            Repr::Tuple(elems) => self.decode_tuple(ty, elems, buf, depth),
            Repr::String => {
                let text = core::str::from_utf8(buf).map_err(|_| Malformed::InvalidUtf8)?;
                Ok((Value::String(String::from(text)), &buf[buf.len()..]))
            }
            Repr::Bytes => Ok((Value::Bytes(buf.to_vec()), &buf[buf.len()..])),
            Repr::Bool => {
                let (head, rest) = take(Kind::Bool, buf, 1)?;
                let flag = match head[0] {
                    0 => false,
                    1 => true,
                    other => return Err(Malformed::Bool(other).into()),
                };
                Ok((Value::Bool(flag), rest))
            }
            Repr::Int(bits) => self.decode_int(ty, Kind::Int, *bits, buf),
            Repr::UInt(bits) => self.decode_int(ty, Kind::UInt, *bits, buf),
            Repr::Address => {
                let (head, rest) = take(Kind::Address, buf, ADDRESS_LEN)?;
                Ok((Value::Address(Address::from_slice(head)?), rest))
            }
            Repr::FixedBytes(len) => {
                let (head, rest) = take(Kind::FixedBytes, buf, *len)?;
                Ok((Value::FixedBytes(head.to_vec()), rest))
            }
            Repr::Function => {
                let (head, rest) = take(Kind::Function, buf, FUNCTION_LEN)?;
                let mut selector = [0u8; FUNCTION_LEN];
                selector.copy_from_slice(head);
                Ok((Value::Function(selector), rest))
            }
        }
    }

    fn decode_int<'a>(
        &self,
        ty: &AbiType,
        kind: Kind,
        bits: usize,
        buf: &'a [u8],
    ) -> Decoded<'a> {
        let (head, rest) = take(kind, buf, bits / 8)?;
        let native = ty.native_int().unwrap_or(match kind {
            Kind::Int => NativeInt::I256,
            _ => NativeInt::U256,
        });

        Ok((read_int(head, native), rest))
    }

    fn decode_slice<'a>(&self, elem: &AbiType, buf: &'a [u8], depth: usize) -> Decoded<'a> {
        let remaining = buf.len();

        let count = match self.codec.static_len_at(elem, depth + 1)? {
            Some(0) if remaining == 0 => 0,
            Some(0) => {
                return Err(PackedError::SizeMismatch {
                    kind: Kind::Slice,
                    expected: 0,
                    actual: remaining,
                })
            }
            Some(elem_len) => {
                if remaining % elem_len != 0 {
                    return Err(PackedError::SizeMismatch {
                        kind: Kind::Slice,
                        expected: remaining - remaining % elem_len,
                        actual: remaining,
                    });
                }
                remaining / elem_len
            }
            // A single element without a static length takes the rest.
            None => usize::from(remaining != 0),
        };

        let (items, rest) = self.decode_items(elem, count, buf, depth)?;
        Ok((Value::Array(items), rest))
    }

    fn decode_array<'a>(
        &self,
        ty: &AbiType,
        elem: &AbiType,
        len: usize,
        buf: &'a [u8],
        depth: usize,
    ) -> Decoded<'a> {
        ensure_prefix(Kind::Array, self.codec.static_len_at(ty, depth)?, buf)?;

        let (items, rest) = self.decode_items(elem, len, buf, depth)?;
        Ok((Value::Array(items), rest))
    }

    fn decode_items<'a>(
        &self,
        elem: &AbiType,
        count: usize,
        mut buf: &'a [u8],
        depth: usize,
    ) -> Result<(Vec<Value>, &'a [u8]), PackedError> {
        let mut items = Vec::with_capacity(count.min(buf.len()));

        for _ in 0..count {
            let (item, rest) = self.decode(elem, buf, depth)?;
            items.push(item);
            buf = rest;
        }

        Ok((items, buf))
    }

    fn decode_tuple<'a>(
        &self,
        ty: &AbiType,
        elems: &[TupleElem],
        mut buf: &'a [u8],
        depth: usize,
    ) -> Decoded<'a> {
        ensure_prefix(Kind::Tuple, self.codec.static_len_at(ty, depth)?, buf)?;

        let mut fields: Vec<(String, Value)> = Vec::with_capacity(elems.len());

        for (index, elem) in elems.iter().enumerate() {
            let (value, rest) = self.decode(&elem.elem, buf, depth)?;
            buf = rest;

            let key = elem.key(index);
            if fields.iter().any(|(name, _)| *name == key) {
                return Err(PackedError::DuplicateKey(key.into_owned()));
            }

            fields.push((key.into_owned(), value));
        }

        Ok((Value::Tuple(fields), buf))
    }
}

/// Unpacks one `ty` from the front of `buf` with the default [`PackedCodec`],
/// returning the value and the unconsumed bytes.
///
/// # Example
///
/// ```rust
/// use packed_abi_core::{decode_packed, AbiType, Value};
///
/// let ty = AbiType::int(8).unwrap();
/// let (value, rest) = decode_packed(&ty, &[0xff, 0x01]).unwrap();
///
/// assert_eq!(value, Value::I8(-1));
/// assert_eq!(rest, &[0x01]);
/// ```
pub fn decode_packed<'a>(ty: &AbiType, buf: &'a [u8]) -> Result<(Value, &'a [u8]), PackedError> {
    PackedCodec::default().decode(ty, buf)
}

/// Unpacks `ty` and fails if any bytes are left over.
pub fn decode_packed_exact(ty: &AbiType, buf: &[u8]) -> Result<Value, PackedError> {
    PackedCodec::default().decode_exact(ty, buf)
}
