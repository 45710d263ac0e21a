// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for packed-abi-core.
use alloc::string::String;

use packed_abi_util::{AddressError, HexError};
use thiserror::Error;

use crate::consts::{MAX_FIXED_BYTES_LEN, MAX_INT_BITS};
use crate::kind::Kind;

/// Errors raised by the [`AbiType`](crate::AbiType) constructors.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DescriptorError {
    #[error("integer width must be a multiple of 8 in 8..={MAX_INT_BITS}, got {0}")]
    InvalidIntWidth(usize),

    #[error("fixed bytes length must be in 1..={MAX_FIXED_BYTES_LEN}, got {0}")]
    InvalidFixedBytesLen(usize),
}

/// Reasons behind [`PackedError::MalformedEncoding`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Malformed {
    #[error("bad boolean byte {0:#04x}")]
    Bool(u8),

    #[error("{0}")]
    Hex(#[from] HexError),

    #[error("{0}")]
    Address(#[from] AddressError),

    #[error("cannot parse {0:?} as a number")]
    NumericText(String),

    #[error("float value is not finite")]
    NonFiniteFloat,

    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors raised while packing or unpacking a value.
///
/// Every failure aborts the whole call; no partial output is returned.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PackedError {
    /// The value shape cannot be packed as the declared kind.
    #[error("cannot encode {found} as {kind}")]
    TypeMismatch { kind: Kind, found: &'static str },

    /// A fixed length was violated: array length, tuple field count,
    /// fixed-bytes width, or a slice payload that is not a whole number of
    /// elements.
    #[error("size mismatch for {kind}: expected {expected}, got {actual}")]
    SizeMismatch {
        kind: Kind,
        expected: usize,
        actual: usize,
    },

    /// The buffer holds fewer bytes than the kind requires.
    #[error("input kind '{kind}' requires length {required}, but input has {remaining}")]
    BufferUnderrun {
        kind: Kind,
        required: usize,
        remaining: usize,
    },

    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] Malformed),

    /// Two tuple fields resolved to the same name while decoding.
    #[error("tuple with repeated field {0:?}")]
    DuplicateKey(String),

    /// Keyed tuple input has no entry for a declared field.
    #[error("cannot get key {0:?}")]
    MissingKey(String),

    #[error("nesting exceeds the maximum depth of {max_depth}")]
    DepthLimitExceeded { max_depth: usize },

    /// Exact decoding left bytes behind.
    #[error("{remaining} trailing bytes after decoding")]
    TrailingBytes { remaining: usize },
}

impl From<HexError> for PackedError {
    fn from(err: HexError) -> Self {
        Self::MalformedEncoding(Malformed::Hex(err))
    }
}

impl From<AddressError> for PackedError {
    fn from(err: AddressError) -> Self {
        Self::MalformedEncoding(Malformed::Address(err))
    }
}
