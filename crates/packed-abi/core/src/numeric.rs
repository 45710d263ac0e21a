// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Integer reduction and padding shared by the encoder and decoder.
use alloc::string::ToString;

use ethnum::{AsU256, I256, U256};

use crate::consts::WORD_LEN;
use crate::error::{Malformed, PackedError};
use crate::kind::Kind;
use crate::types::NativeInt;
use crate::value::Value;

const F64_MANTISSA_BITS: u32 = 52;
const F64_EXPONENT_BIAS: i32 = 1023;

/// Reduces an integer-like value to its 256-bit two's complement word.
///
/// Negative values wrap into the unsigned range, so truncating the word to
/// its low `W / 8` bytes yields the value modulo `2^W`.
pub(crate) fn to_word(value: &Value, kind: Kind) -> Result<U256, PackedError> {
    let word = match value {
        Value::U8(v) => v.as_u256(),
        Value::U16(v) => v.as_u256(),
        Value::U32(v) => v.as_u256(),
        Value::U64(v) => v.as_u256(),
        Value::U128(v) => v.as_u256(),
        Value::I8(v) => v.as_u256(),
        Value::I16(v) => v.as_u256(),
        Value::I32(v) => v.as_u256(),
        Value::I64(v) => v.as_u256(),
        Value::I128(v) => v.as_u256(),
        Value::U256(v) => *v,
        Value::I256(v) => v.as_u256(),
        Value::Float(v) => float_to_word(*v)?,
        Value::String(text) => parse_numeric_text(text)?,
        other => {
            return Err(PackedError::TypeMismatch {
                kind,
                found: other.shape_name(),
            })
        }
    };

    Ok(word)
}

/// Truncates a float toward zero and wraps it into 256 bits.
///
/// The magnitude is rebuilt from the mantissa and exponent, so values past
/// `i128` keep their low bits instead of saturating.
fn float_to_word(v: f64) -> Result<U256, PackedError> {
    if !v.is_finite() {
        return Err(Malformed::NonFiniteFloat.into());
    }

    let bits = v.to_bits();
    let negative = bits >> 63 == 1;
    let exponent = ((bits >> F64_MANTISSA_BITS) & 0x7ff) as i32;

    // Zero and subnormals are below one.
    if exponent == 0 {
        return Ok(U256::ZERO);
    }

    let mantissa = (bits & ((1 << F64_MANTISSA_BITS) - 1)) | (1 << F64_MANTISSA_BITS);
    // |v| == mantissa * 2^shift
    let shift = exponent - F64_EXPONENT_BIAS - F64_MANTISSA_BITS as i32;

    let magnitude = match shift {
        256.. => U256::ZERO,
        0.. => U256::from(mantissa).wrapping_shl(shift as u32),
        -63..0 => U256::from(mantissa >> (-shift) as u32),
        _ => U256::ZERO,
    };

    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Parses decimal or `0x`-prefixed hex text with an optional sign.
///
/// Digits accumulate modulo `2^256`, so any integer text is accepted and a
/// leading `-` negates in two's complement.
pub(crate) fn parse_numeric_text(text: &str) -> Result<U256, PackedError> {
    let malformed = || PackedError::from(Malformed::NumericText(text.to_string()));

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(digits) => (16, digits),
        None => (10, unsigned),
    };

    if digits.is_empty() {
        return Err(malformed());
    }

    let base = U256::from(radix);
    let mut word = U256::ZERO;

    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or_else(malformed)?;
        word = word.wrapping_mul(base).wrapping_add(U256::from(digit));
    }

    Ok(if negative { word.wrapping_neg() } else { word })
}

/// Big-endian bytes of `word` modulo `2^(8 * len)`, left-padded to `len`.
#[inline(always)]
pub(crate) fn write_int_tail(word: U256, len: usize, out: &mut [u8; WORD_LEN]) -> &[u8] {
    debug_assert!(len <= WORD_LEN, "integer width exceeds 256 bits");
    *out = word.to_be_bytes();
    &out[WORD_LEN - len..]
}

#[inline(always)]
fn be_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

/// Rebuilds an integer from exactly `W / 8` big-endian bytes.
///
/// Signed widths sign-extend from the top bit, which is the same as
/// subtracting `2^W` once the magnitude exceeds `2^(W - 1) - 1`.
pub(crate) fn read_int(bytes: &[u8], native: NativeInt) -> Value {
    match native {
        NativeInt::U8 => Value::U8(bytes[0]),
        NativeInt::U16 => Value::U16(u16::from_be_bytes(be_array(bytes))),
        NativeInt::U32 => Value::U32(u32::from_be_bytes(be_array(bytes))),
        NativeInt::U64 => Value::U64(u64::from_be_bytes(be_array(bytes))),
        NativeInt::I8 => Value::I8(i8::from_be_bytes(be_array(bytes))),
        NativeInt::I16 => Value::I16(i16::from_be_bytes(be_array(bytes))),
        NativeInt::I32 => Value::I32(i32::from_be_bytes(be_array(bytes))),
        NativeInt::I64 => Value::I64(i64::from_be_bytes(be_array(bytes))),
        NativeInt::U256 => Value::U256(U256::from_be_bytes(extend_word(bytes, 0x00))),
        NativeInt::I256 => {
            let negative = bytes.first().is_some_and(|b| b & 0x80 != 0);
            let fill = if negative { 0xff } else { 0x00 };
            Value::I256(I256::from_be_bytes(extend_word(bytes, fill)))
        }
    }
}

#[inline(always)]
fn extend_word(bytes: &[u8], fill: u8) -> [u8; WORD_LEN] {
    let mut word = [fill; WORD_LEN];
    word[WORD_LEN - bytes.len()..].copy_from_slice(bytes);
    word
}
