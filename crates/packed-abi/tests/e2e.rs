// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::BTreeMap;

use packed_abi::support::test_utils::{
    SAMPLE_ADDRESS, SAMPLE_ADDRESS_HEX, TransferRecord, transfer_type,
};
use packed_abi::{
    AbiType, Address, Kind, PackedCodec, PackedError, TupleElem, Value, decode_packed,
    decode_packed_exact, encode_packed, encode_packed_into, encoded_len,
};

fn transfer_bytes(amount: u8, memo: &str) -> Vec<u8> {
    let mut expected = SAMPLE_ADDRESS.as_bytes().to_vec();
    expected.extend_from_slice(&[0u8; 31]);
    expected.push(amount);
    expected.extend_from_slice(memo.as_bytes());
    expected
}

#[test]
fn test_record_roundtrip_through_facade() {
    let record = TransferRecord {
        to: SAMPLE_ADDRESS,
        amount: 42,
        memo: "rent".into(),
    };
    let ty = transfer_type();

    let bytes =
        encode_packed(&Value::from_record(&record), &ty).expect("Failed to encode_packed()");
    assert_eq!(bytes, transfer_bytes(42, "rent"));

    let decoded = decode_packed_exact(&ty, &bytes).expect("Failed to decode_packed_exact()");
    assert_eq!(decoded.get("to"), Some(&Value::Address(SAMPLE_ADDRESS)));
    assert_eq!(decoded.get("memo"), Some(&Value::String("rent".into())));
    assert_eq!(decoded.get("amount"), Some(&Value::U256(42u8.into())));
}

#[test]
fn test_map_and_positional_inputs_agree() {
    let ty = transfer_type();

    let mut map = BTreeMap::new();
    map.insert("memo".to_string(), Value::from("x"));
    map.insert("amount".to_string(), Value::U8(7));
    map.insert("to".to_string(), Value::from(SAMPLE_ADDRESS_HEX));

    let positional = Value::Array(vec![
        Value::Address(SAMPLE_ADDRESS),
        Value::U8(7),
        Value::from("x"),
    ]);

    let from_map = encode_packed(&Value::Map(map), &ty).expect("Failed to encode_packed()");
    let from_list = encode_packed(&positional, &ty).expect("Failed to encode_packed()");

    assert_eq!(from_map, from_list);
    assert_eq!(from_map, transfer_bytes(7, "x"));
}

#[test]
fn test_missing_member_is_reported_by_name() {
    let mut map = BTreeMap::new();
    map.insert("to".to_string(), Value::Address(SAMPLE_ADDRESS));
    map.insert("amount".to_string(), Value::U8(1));
    map.insert("note".to_string(), Value::from("x"));

    let result = encode_packed(&Value::Map(map), &transfer_type());

    assert!(matches!(result, Err(PackedError::MissingKey(ref key)) if key == "memo"));
}

#[test]
fn test_encoded_len_and_into_agree_with_encode() {
    let ty = AbiType::slice(AbiType::tuple([
        TupleElem::unnamed(AbiType::bool()),
        TupleElem::unnamed(AbiType::function()),
    ]));
    let value = Value::Array(vec![
        Value::Array(vec![Value::Bool(true), Value::Function([0xab; 24])]),
        Value::Array(vec![Value::Bool(false), Value::Function([0xcd; 24])]),
    ]);

    let bytes = encode_packed(&value, &ty).expect("Failed to encode_packed()");
    assert_eq!(bytes.len(), 50);
    assert_eq!(encoded_len(&value, &ty).expect("Failed to encoded_len()"), 50);

    let mut out = vec![0xff];
    encode_packed_into(&value, &ty, &mut out).expect("Failed to encode_packed_into()");
    assert_eq!(out[0], 0xff);
    assert_eq!(&out[1..], bytes.as_slice());
}

#[test]
fn test_failed_encode_into_leaves_buffer_untouched() {
    let ty = AbiType::tuple([
        TupleElem::unnamed(AbiType::bool()),
        TupleElem::unnamed(AbiType::address()),
    ]);
    let value = Value::Array(vec![Value::Bool(true), Value::from("0x1234")]);

    let mut out = vec![0xaa, 0xbb];
    let result = encode_packed_into(&value, &ty, &mut out);

    assert!(result.is_err());
    assert_eq!(out, vec![0xaa, 0xbb]);
}

#[test]
fn test_streaming_decode_of_concatenated_values() {
    let ty = AbiType::tuple([
        TupleElem::new("who", AbiType::address()),
        TupleElem::new("ok", AbiType::bool()),
    ]);

    let first = encode_packed(
        &Value::Array(vec![Value::Address(Address::ZERO), Value::Bool(true)]),
        &ty,
    )
    .expect("Failed to encode_packed()");
    let second = encode_packed(
        &Value::Array(vec![Value::Address(SAMPLE_ADDRESS), Value::Bool(false)]),
        &ty,
    )
    .expect("Failed to encode_packed()");

    let mut stream = first.clone();
    stream.extend_from_slice(&second);

    let (a, rest) = decode_packed(&ty, &stream).expect("Failed to decode_packed()");
    let (b, rest) = decode_packed(&ty, rest).expect("Failed to decode_packed()");

    assert!(rest.is_empty());
    assert_eq!(a.get("who"), Some(&Value::Address(Address::ZERO)));
    assert_eq!(b.get("who"), Some(&Value::Address(SAMPLE_ADDRESS)));
    assert_eq!(b.get("ok"), Some(&Value::Bool(false)));
}

#[test]
fn test_exact_decode_rejects_leftovers() {
    let result = decode_packed_exact(&AbiType::bool(), &[0x01, 0x00]);

    assert!(matches!(
        result,
        Err(PackedError::TrailingBytes { remaining: 1 })
    ));
}

#[test]
fn test_custom_depth_limit_through_facade() {
    let ty = AbiType::slice(AbiType::slice(AbiType::bool()));
    let value = Value::Array(vec![Value::Array(vec![Value::Bool(true)])]);

    let shallow = PackedCodec::new().with_max_depth(2);
    let deep_enough = PackedCodec::new().with_max_depth(3);

    assert!(matches!(
        shallow.encode(&value, &ty),
        Err(PackedError::DepthLimitExceeded { max_depth: 2 })
    ));
    assert_eq!(
        deep_enough.encode(&value, &ty).expect("Failed to encode()"),
        vec![0x01]
    );
}

#[test]
fn test_error_messages_name_the_kind() {
    let err = encode_packed(&Value::U8(1), &AbiType::bool()).expect_err("Expected TypeMismatch");

    assert!(matches!(err, PackedError::TypeMismatch { kind: Kind::Bool, .. }));
    assert!(err.to_string().contains("bool"));
}

#[test]
fn test_util_reexports() {
    let parsed: Address = SAMPLE_ADDRESS_HEX.parse().expect("Failed to parse address");

    assert_eq!(parsed, SAMPLE_ADDRESS);
    assert_eq!(packed_abi::util::encode_hex(&[0xde, 0xad]), "0xdead");
}
