// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Discriminator selecting the packing rule of a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `T[]`
    Slice,
    /// `T[N]`
    Array,
    /// `(T1, T2, ...)`
    Tuple,
    String,
    Bool,
    Address,
    /// `intN`
    Int,
    /// `uintN`
    UInt,
    /// Dynamic `bytes`.
    Bytes,
    /// `bytesN`
    FixedBytes,
    /// 24-byte external function reference.
    Function,
}

impl Kind {
    /// Kinds whose packed form consumes everything left in the buffer.
    #[inline(always)]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Kind::Slice | Kind::Bytes | Kind::String)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Tuple => "tuple",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Address => "address",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Bytes => "bytes",
            Kind::FixedBytes => "fixedBytes",
            Kind::Function => "function",
        };
        f.write_str(name)
    }
}
