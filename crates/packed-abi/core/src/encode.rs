// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Packed encoder.
//!
//! Members are concatenated with no separators, no length prefixes and no
//! word alignment. Integers are left-padded to `W / 8` bytes, `bytesN` and
//! function values are right-padded to their declared length.
use alloc::borrow::Cow;
use alloc::vec::Vec;

use packed_abi_util::{decode_hex, Address, ADDRESS_LEN};

use crate::codec::PackedCodec;
use crate::consts::{FUNCTION_LEN, WORD_LEN};
use crate::error::PackedError;
use crate::kind::Kind;
use crate::numeric::{to_word, write_int_tail};
use crate::types::{AbiType, Repr, TupleElem};
use crate::value::Value;

/// Destination of packed bytes.
pub(crate) trait Sink {
    fn put(&mut self, bytes: &[u8]);
    fn put_zeros(&mut self, count: usize);
}

impl Sink for Vec<u8> {
    #[inline(always)]
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline(always)]
    fn put_zeros(&mut self, count: usize) {
        self.resize(self.len() + count, 0);
    }
}

/// Sink that only counts.
#[derive(Debug, Default)]
pub(crate) struct LenCounter {
    len: usize,
}

impl LenCounter {
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Sink for LenCounter {
    #[inline(always)]
    fn put(&mut self, bytes: &[u8]) {
        self.len += bytes.len();
    }

    #[inline(always)]
    fn put_zeros(&mut self, count: usize) {
        self.len += count;
    }
}

#[inline(always)]
fn mismatch(kind: Kind, value: &Value) -> PackedError {
    PackedError::TypeMismatch {
        kind,
        found: value.shape_name(),
    }
}

pub(crate) struct Encoder<'c, 's, S: ?Sized> {
    codec: &'c PackedCodec,
    sink: &'s mut S,
}

impl<'c, 's, S> Encoder<'c, 's, S>
where
    S: Sink + ?Sized,
{
    pub(crate) fn new(codec: &'c PackedCodec, sink: &'s mut S) -> Self {
        Self { codec, sink }
    }

    /// Packs `value` as `ty`; `depth` is the nesting level of the caller.
    pub(crate) fn encode(
        &mut self,
        value: &Value,
        ty: &AbiType,
        depth: usize,
    ) -> Result<(), PackedError> {
        let depth = self.codec.enter(depth)?;

        match ty.repr() {
            Repr::Array(elem, len) => {
                self.encode_sequence(value, Kind::Array, elem, Some(*len), depth)
            }
            Repr::Slice(elem) => self.encode_sequence(value, Kind::Slice, elem, None, depth),
            Repr::Tuple(elems) => self.encode_tuple(value, elems, depth),
            Repr::String => self.encode_string(value),
            Repr::Bool => self.encode_bool(value),
            Repr::Address => self.encode_address(value),
            Repr::Int(bits) => self.encode_int(value, Kind::Int, *bits),
            Repr::UInt(bits) => self.encode_int(value, Kind::UInt, *bits),
            Repr::Bytes => self.encode_bytes(value),
            Repr::FixedBytes(len) => self.encode_fixed_bytes(value, Kind::FixedBytes, *len),
            Repr::Function => self.encode_fixed_bytes(value, Kind::Function, FUNCTION_LEN),
        }
    }

    fn encode_sequence(
        &mut self,
        value: &Value,
        kind: Kind,
        elem: &AbiType,
        declared_len: Option<usize>,
        depth: usize,
    ) -> Result<(), PackedError> {
        let Value::Array(items) = value else {
            return Err(mismatch(kind, value));
        };

        if let Some(expected) = declared_len {
            if items.len() != expected {
                return Err(PackedError::SizeMismatch {
                    kind,
                    expected,
                    actual: items.len(),
                });
            }
        }

        for item in items {
            self.encode(item, elem, depth)?;
        }

        Ok(())
    }

    fn encode_tuple(
        &mut self,
        value: &Value,
        elems: &[TupleElem],
        depth: usize,
    ) -> Result<(), PackedError> {
        // Longer input is accepted; members beyond the declared ones are ignored.
        let actual = value
            .container_len()
            .ok_or_else(|| mismatch(Kind::Tuple, value))?;

        if actual < elems.len() {
            return Err(PackedError::SizeMismatch {
                kind: Kind::Tuple,
                expected: elems.len(),
                actual,
            });
        }

        for (index, elem) in elems.iter().enumerate() {
            let member = match value {
                Value::Array(items) => &items[index],
                _ => {
                    let key = elem.key(index);
                    value
                        .get(&key)
                        .ok_or_else(|| PackedError::MissingKey(key.into_owned()))?
                }
            };

            self.encode(member, &elem.elem, depth)?;
        }

        Ok(())
    }

    fn encode_string(&mut self, value: &Value) -> Result<(), PackedError> {
        let Value::String(text) = value else {
            return Err(mismatch(Kind::String, value));
        };

        self.sink.put(text.as_bytes());
        Ok(())
    }

    fn encode_bool(&mut self, value: &Value) -> Result<(), PackedError> {
        let Value::Bool(flag) = value else {
            return Err(mismatch(Kind::Bool, value));
        };

        self.sink.put(&[u8::from(*flag)]);
        Ok(())
    }

    fn encode_address(&mut self, value: &Value) -> Result<(), PackedError> {
        let address = match value {
            Value::Address(address) => *address,
            Value::FixedBytes(bytes) => {
                Address::from_slice(bytes).map_err(|_| PackedError::SizeMismatch {
                    kind: Kind::Address,
                    expected: ADDRESS_LEN,
                    actual: bytes.len(),
                })?
            }
            Value::String(text) => text.parse::<Address>()?,
            other => return Err(mismatch(Kind::Address, other)),
        };

        self.sink.put(address.as_bytes());
        Ok(())
    }

    fn encode_int(&mut self, value: &Value, kind: Kind, bits: usize) -> Result<(), PackedError> {
        let word = to_word(value, kind)?;
        let mut scratch = [0u8; WORD_LEN];

        self.sink.put(write_int_tail(word, bits / 8, &mut scratch));
        Ok(())
    }

    fn encode_bytes(&mut self, value: &Value) -> Result<(), PackedError> {
        let bytes = byte_payload(value, Kind::Bytes)?;

        self.sink.put(&bytes);
        Ok(())
    }

    fn encode_fixed_bytes(
        &mut self,
        value: &Value,
        kind: Kind,
        len: usize,
    ) -> Result<(), PackedError> {
        let bytes = match value {
            Value::Function(selector) if kind == Kind::Function => Cow::Borrowed(&selector[..]),
            _ => byte_payload(value, kind)?,
        };

        if bytes.len() > len {
            return Err(PackedError::SizeMismatch {
                kind,
                expected: len,
                actual: bytes.len(),
            });
        }

        self.sink.put(&bytes);
        self.sink.put_zeros(len - bytes.len());
        Ok(())
    }
}

/// Raw bytes of a byte-like value; text is read as hex.
fn byte_payload(value: &Value, kind: Kind) -> Result<Cow<'_, [u8]>, PackedError> {
    match value {
        Value::Bytes(bytes) | Value::FixedBytes(bytes) => Ok(Cow::Borrowed(bytes)),
        Value::String(text) => Ok(Cow::Owned(decode_hex(text)?)),
        other => Err(mismatch(kind, other)),
    }
}

/// Packs `value` as `ty` with the default [`PackedCodec`].
///
/// # Example
///
/// ```rust
/// use packed_abi_core::{encode_packed, AbiType, Value};
///
/// let ty = AbiType::uint(16).unwrap();
/// assert_eq!(encode_packed(&Value::U8(1), &ty).unwrap(), vec![0x00, 0x01]);
///
/// let ty = AbiType::int(8).unwrap();
/// assert_eq!(encode_packed(&Value::I8(-1), &ty).unwrap(), vec![0xff]);
/// ```
pub fn encode_packed(value: &Value, ty: &AbiType) -> Result<Vec<u8>, PackedError> {
    PackedCodec::default().encode(value, ty)
}

/// Appends the packed form of `value` to `out` with the default [`PackedCodec`].
pub fn encode_packed_into(
    value: &Value,
    ty: &AbiType,
    out: &mut Vec<u8>,
) -> Result<(), PackedError> {
    PackedCodec::default().encode_into(value, ty, out)
}

/// Byte length [`encode_packed`] would produce.
pub fn encoded_len(value: &Value, ty: &AbiType) -> Result<usize, PackedError> {
    PackedCodec::default().encoded_len(value, ty)
}
