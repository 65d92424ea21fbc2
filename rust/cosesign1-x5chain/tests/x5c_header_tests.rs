// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for locating and validating the `x5chain` header.

mod common;

use common::{sign1_with_chain, sign1_with_unprotected};
use cosesign1_x5chain::{decode, DecodeOptions, ThumbprintError, COSE_HEADER_X5CHAIN};

#[test]
fn x5chain_label_is_33() {
    assert_eq!(COSE_HEADER_X5CHAIN, 33);
}

#[test]
fn decode_returns_chain_in_encoded_order() {
    let cose = sign1_with_chain(true, &[b"leaf", b"intermediate", b"root"]);
    let decoded = decode(&cose, &DecodeOptions::default()).expect("decode");

    assert_eq!(decoded.chain, vec![b"leaf".to_vec(), b"intermediate".to_vec(), b"root".to_vec()]);
    assert!(decoded.unprotected.contains_label(33));
}

#[test]
fn decode_accepts_empty_chain() {
    let cose = sign1_with_chain(true, &[]);
    let decoded = decode(&cose, &DecodeOptions::default()).expect("decode");
    assert!(decoded.chain.is_empty());
}

#[test]
fn decode_rejects_missing_x5chain() {
    let cose = sign1_with_unprotected(|enc| {
        enc.map(1).unwrap();
        enc.i64(4).unwrap();
        enc.bytes(b"kid").unwrap();
    });

    let err = decode(&cose, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, ThumbprintError::MissingX5Chain), "err was: {err}");
}

#[test]
fn decode_ignores_text_label_named_like_x5chain() {
    let cose = sign1_with_unprotected(|enc| {
        enc.map(1).unwrap();
        enc.str("33").unwrap();
        enc.array(0).unwrap();
    });

    let err = decode(&cose, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, ThumbprintError::MissingX5Chain), "err was: {err}");
}

#[test]
fn decode_rejects_non_bstr_chain_element() {
    let cose = sign1_with_unprotected(|enc| {
        enc.map(1).unwrap();
        enc.i64(33).unwrap();
        enc.array(2).unwrap();
        enc.bytes(b"leaf").unwrap();
        enc.str("not-a-cert").unwrap();
    });

    match decode(&cose, &DecodeOptions::default()).unwrap_err() {
        ThumbprintError::InvalidX5ChainType(msg) => assert!(msg.contains("element 1"), "msg was: {msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn decode_rejects_non_array_chain() {
    let cose = sign1_with_unprotected(|enc| {
        enc.map(1).unwrap();
        enc.i64(33).unwrap();
        enc.map(0).unwrap();
    });

    let err = decode(&cose, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, ThumbprintError::InvalidX5ChainType(_)), "err was: {err}");
}

#[test]
fn single_bstr_chain_requires_opt_in() {
    let cose = sign1_with_unprotected(|enc| {
        enc.map(1).unwrap();
        enc.i64(33).unwrap();
        enc.bytes(b"only-cert").unwrap();
    });

    let err = decode(&cose, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, ThumbprintError::InvalidX5ChainType(_)), "err was: {err}");

    let options = DecodeOptions {
        allow_single_certificate: true,
        ..Default::default()
    };
    let decoded = decode(&cose, &options).expect("decode");
    assert_eq!(decoded.chain, vec![b"only-cert".to_vec()]);
}

#[test]
fn decode_errors_pass_through_unchanged() {
    let err = decode(&[0x81, 0x40], &DecodeOptions::default()).unwrap_err();
    assert!(
        matches!(err, ThumbprintError::Decode(cosesign1_x5chain::CoseDecodeError::MissingUnprotectedHeader)),
        "err was: {err}"
    );
}
