// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Nesting depth allowed by [`PackedCodec::default`](crate::PackedCodec).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Byte length of a function value (20-byte address + 4-byte selector).
pub const FUNCTION_LEN: usize = 24;

/// Widest `intN` / `uintN`.
pub const MAX_INT_BITS: usize = 256;

/// Longest `bytesN`.
pub const MAX_FIXED_BYTES_LEN: usize = 32;

/// Byte length of the 256-bit word integers are reduced into.
pub(crate) const WORD_LEN: usize = 32;
