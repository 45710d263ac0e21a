// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Codec configuration.
use alloc::vec::Vec;

use crate::consts::DEFAULT_MAX_DEPTH;
use crate::decode::Decoder;
use crate::encode::{Encoder, LenCounter};
use crate::error::PackedError;
use crate::types::{AbiType, Repr};
use crate::value::Value;

/// Packed codec with an explicit nesting limit.
///
/// Each descriptor level entered while encoding or decoding counts toward
/// `max_depth`; a scalar at the top level is depth 1.
///
/// # Example
///
/// ```rust
/// use packed_abi_core::{AbiType, PackedCodec, PackedError, Value};
///
/// let codec = PackedCodec::new().with_max_depth(2);
/// let nested = AbiType::slice(AbiType::slice(AbiType::bool()));
///
/// let result = codec.encode(&Value::Array(vec![]), &nested);
/// assert!(result.is_ok());
///
/// let deeper = AbiType::slice(nested);
/// let value = Value::Array(vec![Value::Array(vec![Value::Array(vec![Value::Bool(true)])])]);
/// assert!(matches!(
///     codec.encode(&value, &deeper),
///     Err(PackedError::DepthLimitExceeded { max_depth: 2 })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedCodec {
    max_depth: usize,
}

impl Default for PackedCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl PackedCodec {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline(always)]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Steps one level down from `depth`.
    #[inline(always)]
    pub(crate) fn enter(&self, depth: usize) -> Result<usize, PackedError> {
        let next = depth + 1;

        if next > self.max_depth {
            return Err(PackedError::DepthLimitExceeded {
                max_depth: self.max_depth,
            });
        }

        Ok(next)
    }

    /// Static packed length of `ty`, which sits at nesting level `depth`.
    ///
    /// Same result as [`AbiType::static_len`], but every container level
    /// walked counts toward `max_depth`, so an oversized descriptor fails
    /// before the walk gets deep.
    pub(crate) fn static_len_at(
        &self,
        ty: &AbiType,
        depth: usize,
    ) -> Result<Option<usize>, PackedError> {
        match ty.repr() {
            Repr::Array(elem, len) => {
                let elem_len = self.static_len_at(elem, self.enter(depth)?)?;
                Ok(elem_len.and_then(|elem_len| elem_len.checked_mul(*len)))
            }
            Repr::Tuple(elems) => {
                let mut total = 0usize;

                for elem in elems {
                    let elem_len = self.static_len_at(&elem.elem, self.enter(depth)?)?;
                    let Some(sum) = elem_len.and_then(|elem_len| total.checked_add(elem_len))
                    else {
                        return Ok(None);
                    };
                    total = sum;
                }

                Ok(Some(total))
            }
            // Leaves and slices answer without descending.
            _ => Ok(ty.static_len()),
        }
    }

    /// Packs `value` as `ty`.
    pub fn encode(&self, value: &Value, ty: &AbiType) -> Result<Vec<u8>, PackedError> {
        let mut out = Vec::new();
        self.encode_into(value, ty, &mut out)?;
        Ok(out)
    }

    /// Appends the packed form of `value` to `out`. On error `out` is left
    /// as it was.
    pub fn encode_into(
        &self,
        value: &Value,
        ty: &AbiType,
        out: &mut Vec<u8>,
    ) -> Result<(), PackedError> {
        log::trace!("packing {} value as {}", value.shape_name(), ty.kind());

        let start = out.len();
        let result = Encoder::new(self, &mut *out).encode(value, ty, 0);

        if let Err(err) = &result {
            log::debug!("packing as {} failed: {}", ty.kind(), err);
            out.truncate(start);
        }

        result
    }

    /// Byte length `encode` would produce, without building the output.
    pub fn encoded_len(&self, value: &Value, ty: &AbiType) -> Result<usize, PackedError> {
        let mut counter = LenCounter::default();
        Encoder::new(self, &mut counter).encode(value, ty, 0)?;
        Ok(counter.len())
    }

    /// Unpacks one `ty` from the front of `buf`, returning the value and the
    /// unconsumed bytes. An empty `buf` is rejected.
    pub fn decode<'a>(
        &self,
        ty: &AbiType,
        buf: &'a [u8],
    ) -> Result<(Value, &'a [u8]), PackedError> {
        log::trace!("unpacking {} from {} bytes", ty.kind(), buf.len());

        let result = Decoder::new(self).decode_top(ty, buf);

        if let Err(err) = &result {
            log::debug!("unpacking {} failed: {}", ty.kind(), err);
        }

        result
    }

    /// Like [`decode`](Self::decode) but fails unless `buf` is consumed
    /// entirely.
    pub fn decode_exact(&self, ty: &AbiType, buf: &[u8]) -> Result<Value, PackedError> {
        let (value, rest) = self.decode(ty, buf)?;

        if !rest.is_empty() {
            return Err(PackedError::TrailingBytes {
                remaining: rest.len(),
            });
        }

        Ok(value)
    }
}
