// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared envelope builders for `cosesign1-x5chain` integration tests.

#![allow(dead_code)]

use minicbor::data::Tag;
use minicbor::Encoder;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256, computed independently of the crate under test.
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// `[b'prot', {33: [certs...]}, null, b'sig']`, optionally tagged 18.
pub(crate) fn sign1_with_chain(tagged: bool, certs: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    if tagged {
        enc.tag(Tag::new(18)).unwrap();
    }
    enc.array(4).unwrap();
    enc.bytes(b"prot").unwrap();
    enc.map(1).unwrap();
    enc.i64(33).unwrap();
    enc.array(certs.len() as u64).unwrap();
    for cert in certs {
        enc.bytes(cert).unwrap();
    }
    enc.null().unwrap();
    enc.bytes(b"sig").unwrap();
    out
}

/// Tagged envelope whose unprotected map is written by `write_map`.
pub(crate) fn sign1_with_unprotected(write_map: impl FnOnce(&mut Encoder<&mut Vec<u8>>)) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.tag(Tag::new(18)).unwrap();
    enc.array(4).unwrap();
    enc.bytes(b"prot").unwrap();
    write_map(&mut enc);
    enc.null().unwrap();
    enc.bytes(b"sig").unwrap();
    out
}
