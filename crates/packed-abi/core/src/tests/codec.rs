// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::codec::PackedCodec;
use crate::consts::DEFAULT_MAX_DEPTH;
use crate::error::PackedError;
use crate::support::test_utils::{nested_slice_type, nested_slice_value, transfer_type, uint};
use crate::types::{AbiType, TupleElem};
use crate::value::Value;

const DEEP_LEVELS: usize = 100_000;
const SMALL_STACK: usize = 256 * 1024;

/// Runs `f` on a thread with a small stack so unbounded recursion aborts.
fn on_small_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .expect("Failed to spawn thread")
        .join()
        .expect("Thread panicked");
}

/// Decodes `ty` with the default codec and leaks it; dropping a descriptor
/// this deep recurses once per level.
fn assert_decode_hits_depth_limit(ty: AbiType, buf: &[u8]) {
    let result = PackedCodec::default().decode(&ty, buf).map(|(value, _)| value);
    core::mem::forget(ty);

    assert!(matches!(
        result,
        Err(PackedError::DepthLimitExceeded {
            max_depth: DEFAULT_MAX_DEPTH
        })
    ));
}

#[test]
fn test_default_max_depth() {
    assert_eq!(PackedCodec::default().max_depth(), DEFAULT_MAX_DEPTH);
    assert_eq!(PackedCodec::new().with_max_depth(3).max_depth(), 3);
}

#[test]
fn test_encode_within_depth_limit() {
    // 3 slice levels + bool = depth 4.
    let codec = PackedCodec::new().with_max_depth(4);

    let encoded = codec
        .encode(&nested_slice_value(3), &nested_slice_type(3))
        .expect("Failed to encode()");

    assert_eq!(encoded, vec![0x01]);
}

#[test]
fn test_encode_reports_depth_limit() {
    let codec = PackedCodec::new().with_max_depth(3);

    let result = codec.encode(&nested_slice_value(3), &nested_slice_type(3));

    assert!(result.is_err());
    assert!(matches!(
        result,
        Err(PackedError::DepthLimitExceeded { max_depth: 3 })
    ));
}

#[test]
fn test_decode_within_depth_limit() {
    let codec = PackedCodec::new().with_max_depth(4);

    let value = codec
        .decode_exact(&nested_slice_type(3), &[0x01])
        .expect("Failed to decode_exact()");

    assert_eq!(value, nested_slice_value(3));
}

#[test]
fn test_decode_reports_depth_limit() {
    let codec = PackedCodec::new().with_max_depth(3);

    let result = codec.decode(&nested_slice_type(3), &[0x01]);

    assert!(result.is_err());
    assert!(matches!(
        result,
        Err(PackedError::DepthLimitExceeded { max_depth: 3 })
    ));
}

#[test]
fn test_default_codec_rejects_pathological_nesting() {
    let levels = DEFAULT_MAX_DEPTH * 4;
    let codec = PackedCodec::default();

    let encoded = codec.encode(&nested_slice_value(levels), &nested_slice_type(levels));
    let decoded = codec.decode(&nested_slice_type(levels), &[0x01]);

    assert!(matches!(encoded, Err(PackedError::DepthLimitExceeded { .. })));
    assert!(matches!(decoded, Err(PackedError::DepthLimitExceeded { .. })));
}

#[test]
fn test_zero_depth_rejects_everything() {
    let codec = PackedCodec::new().with_max_depth(0);

    assert!(matches!(
        codec.encode(&Value::Bool(true), &AbiType::bool()),
        Err(PackedError::DepthLimitExceeded { max_depth: 0 })
    ));
}

#[test]
fn test_encoded_len_respects_depth_limit() {
    let codec = PackedCodec::new().with_max_depth(2);

    let result = codec.encoded_len(&nested_slice_value(2), &nested_slice_type(2));

    assert!(matches!(
        result,
        Err(PackedError::DepthLimitExceeded { max_depth: 2 })
    ));
}

#[test]
fn test_bounded_static_len_matches_unbounded() {
    let codec = PackedCodec::default();
    let pair = AbiType::tuple([
        TupleElem::unnamed(AbiType::bool()),
        TupleElem::unnamed(uint(16)),
    ]);

    for ty in [
        AbiType::bool(),
        AbiType::array(pair.clone(), 4),
        AbiType::tuple(Vec::<TupleElem>::new()),
        AbiType::slice(pair.clone()),
        transfer_type(),
        pair,
    ] {
        assert_eq!(
            codec.static_len_at(&ty, 1).expect("Failed to static_len_at()"),
            ty.static_len()
        );
    }
}

#[test]
fn test_bounded_static_len_counts_levels() {
    // array(array(bool, 1), 1) spans three levels.
    let ty = AbiType::array(AbiType::array(AbiType::bool(), 1), 1);

    assert_eq!(
        PackedCodec::new()
            .with_max_depth(3)
            .static_len_at(&ty, 1)
            .expect("Failed to static_len_at()"),
        Some(1)
    );
    assert!(matches!(
        PackedCodec::new().with_max_depth(2).static_len_at(&ty, 1),
        Err(PackedError::DepthLimitExceeded { max_depth: 2 })
    ));
}

#[test]
fn test_decode_deep_array_descriptor_stops_at_limit() {
    on_small_stack(|| {
        let ty = (0..DEEP_LEVELS).fold(AbiType::bool(), |inner, _| AbiType::array(inner, 1));
        assert_decode_hits_depth_limit(ty, &[0x01]);
    });
}

#[test]
fn test_decode_deep_tuple_descriptor_stops_at_limit() {
    on_small_stack(|| {
        let ty = (0..DEEP_LEVELS).fold(AbiType::bool(), |inner, _| {
            AbiType::tuple([TupleElem::unnamed(inner)])
        });
        assert_decode_hits_depth_limit(ty, &[0x01]);
    });
}

#[test]
fn test_decode_slice_of_deep_array_stops_at_limit() {
    on_small_stack(|| {
        let deep = (0..DEEP_LEVELS).fold(AbiType::bool(), |inner, _| AbiType::array(inner, 1));
        assert_decode_hits_depth_limit(AbiType::slice(deep), &[0x01]);
    });
}

#[test]
fn test_decode_empty_buffer_with_deep_descriptor_stops_at_limit() {
    on_small_stack(|| {
        let ty = (0..DEEP_LEVELS).fold(AbiType::bool(), |inner, _| AbiType::array(inner, 1));
        assert_decode_hits_depth_limit(ty, &[]);
    });
}
