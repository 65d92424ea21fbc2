// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use cosesign1_envelope::{CborValue, CoseHeaderMap, DecodeOptions};

use crate::error::ThumbprintError;

/// COSE header label of the X.509 certificate chain (`x5chain`, RFC 9360).
pub const COSE_HEADER_X5CHAIN: i64 = 33;

/// Extracts the `x5chain` header (label 33) from an unprotected header map
/// as raw certificate bytes, leaf first.
///
/// The value must be an array of CBOR bstr values. An empty array yields an
/// empty chain. A single bstr (the RFC 9360 single-certificate form) is only
/// accepted when `options.allow_single_certificate` is set.
pub fn extract_x5chain(headers: &CoseHeaderMap, options: &DecodeOptions) -> Result<Vec<Vec<u8>>, ThumbprintError> {
    let value = headers.get(COSE_HEADER_X5CHAIN).ok_or(ThumbprintError::MissingX5Chain)?;

    match value {
        CborValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                CborValue::Bytes(der) => Ok(der.clone()),
                other => Err(ThumbprintError::InvalidX5ChainType(format!(
                    "element {index} is a {}",
                    other.type_name()
                ))),
            })
            .collect(),
        CborValue::Bytes(der) if options.allow_single_certificate => Ok(vec![der.clone()]),
        other => Err(ThumbprintError::InvalidX5ChainType(format!("found a {}", other.type_name()))),
    }
}
