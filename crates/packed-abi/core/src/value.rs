// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Values accepted by the encoder and produced by the decoder.
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use ethnum::{I256, U256};
use packed_abi_util::Address;

use crate::consts::FUNCTION_LEN;

/// A value to pack, or the result of unpacking.
///
/// There is one variant per accepted input shape. Which shapes a given
/// [`Kind`](crate::Kind) accepts is decided by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    /// Truncated toward zero when packed as an integer.
    Float(f64),
    U256(U256),
    I256(I256),
    /// UTF-8 text. Integer kinds parse it as decimal or `0x` hex, byte kinds
    /// as hex, `address` as a hex address.
    String(String),
    Bytes(Vec<u8>),
    FixedBytes(Vec<u8>),
    Address(Address),
    Function([u8; FUNCTION_LEN]),
    /// Ordered sequence: array and slice elements, or positional tuple members.
    Array(Vec<Value>),
    /// Keyed tuple members; iteration order is irrelevant.
    Map(BTreeMap<String, Value>),
    /// Ordered named tuple members. Decoded tuples use this form.
    Tuple(Vec<(String, Value)>),
}

/// Named-field access for record types packed as tuples.
///
/// ```rust
/// use packed_abi_core::{NamedFields, Value};
///
/// struct Transfer {
///     amount: u64,
///     ok: bool,
/// }
///
/// impl NamedFields for Transfer {
///     fn field_names(&self) -> Vec<String> {
///         vec!["amount".into(), "ok".into()]
///     }
///
///     fn field_value(&self, name: &str) -> Option<Value> {
///         match name {
///             "amount" => Some(Value::U64(self.amount)),
///             "ok" => Some(Value::Bool(self.ok)),
///             _ => None,
///         }
///     }
/// }
///
/// let value = Value::from_record(&Transfer { amount: 7, ok: true });
/// assert_eq!(value.get("amount"), Some(&Value::U64(7)));
/// ```
pub trait NamedFields {
    fn field_names(&self) -> Vec<String>;
    fn field_value(&self, name: &str) -> Option<Value>;
}

impl Value {
    /// Converts a record into the ordered named form. Names without a value
    /// are skipped.
    pub fn from_record<R>(record: &R) -> Self
    where
        R: NamedFields + ?Sized,
    {
        let fields = record
            .field_names()
            .into_iter()
            .filter_map(|name| {
                let value = record.field_value(&name)?;
                Some((name, value))
            })
            .collect();

        Value::Tuple(fields)
    }

    /// Short name of the variant, used in error reports.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::U128(_) => "u128",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::I128(_) => "i128",
            Value::Float(_) => "float",
            Value::U256(_) => "u256",
            Value::I256(_) => "i256",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::FixedBytes(_) => "fixed bytes",
            Value::Address(_) => "address",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Number of members of a container value, `None` for scalars.
    pub fn container_len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            Value::Tuple(fields) => Some(fields.len()),
            _ => None,
        }
    }

    /// Looks up a named member of a [`Value::Map`] or [`Value::Tuple`].
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(name),
            Value::Tuple(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) | Value::FixedBytes(bytes) => Some(bytes),
            Value::Function(bytes) => Some(bytes),
            Value::Address(address) => Some(address.as_bytes()),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident,)*) => {$(
        impl From<$ty> for Value {
            #[inline(always)]
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }
    )*};
}

impl_from_for_value! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    f64 => Float,
    U256 => U256,
    I256 => I256,
    String => String,
    Vec<u8> => Bytes,
    Address => Address,
    Vec<Value> => Array,
    BTreeMap<String, Value> => Map,
    Vec<(String, Value)> => Tuple,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}
