// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::Path;

use cosesign1_envelope::{parse_cose_sign1, CoseHeaderMap, DecodeOptions};
use tracing::debug;

use crate::envelope_reader::read_envelope;
use crate::error::ThumbprintError;
use crate::thumbprint::{thumbprints, Thumbprint};
use crate::x5c_header::extract_x5chain;

/// The unprotected header map of an envelope together with its certificate
/// chain, leaf first.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedX5Chain {
    pub unprotected: CoseHeaderMap,
    pub chain: Vec<Vec<u8>>,
}

/// Decode a COSE_Sign1 envelope and pull out its `x5chain`.
pub fn decode(cose_sign1: &[u8], options: &DecodeOptions) -> Result<DecodedX5Chain, ThumbprintError> {
    let envelope = parse_cose_sign1(cose_sign1, options)?;
    let chain = extract_x5chain(&envelope.unprotected, options)?;
    debug!(certificates = chain.len(), "extracted x5chain");

    Ok(DecodedX5Chain {
        unprotected: envelope.unprotected,
        chain,
    })
}

/// SHA-256 thumbprints of the envelope's certificate chain, leaf first.
pub fn cert_chain_thumbprints(cose_sign1: &[u8], options: &DecodeOptions) -> Result<Vec<Thumbprint>, ThumbprintError> {
    let decoded = decode(cose_sign1, options)?;
    Ok(thumbprints(&decoded.chain))
}

/// Read an envelope file (at most `max_len` bytes) and thumbprint its chain.
pub fn cert_chain_thumbprints_from_file(
    path: impl AsRef<Path>,
    max_len: usize,
    options: &DecodeOptions,
) -> Result<Vec<Thumbprint>, ThumbprintError> {
    let bytes = read_envelope(path, max_len)?;
    cert_chain_thumbprints(&bytes, options)
}
