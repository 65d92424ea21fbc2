// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use tracing::debug;

use crate::cbor_value::{decode_cbor_value, CborValue};
use crate::decode_options::{DecodeOptions, TagPolicy};
use crate::error::CoseDecodeError;
use crate::header_map::CoseHeaderMap;

pub const COSE_SIGN1_TAG: u64 = 18;

/// A structurally validated COSE_Sign1 envelope.
///
/// Only the protected and unprotected elements are required to be present.
/// Elements are kept as decoded; nothing beyond the unprotected header map is
/// interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct CoseSign1Envelope {
    /// Whether the input carried the COSE_Sign1 tag.
    pub tagged: bool,
    pub protected: CborValue,
    pub unprotected: CoseHeaderMap,
    pub payload: Option<CborValue>, // absent element; a detached payload is `Some(Null)`
    pub signature: Option<CborValue>,
}

impl CoseSign1Envelope {
    /// The serialized protected header bucket, if element 0 is a bstr.
    pub fn protected_bytes(&self) -> Option<&[u8]> {
        self.protected.as_bytes()
    }
}

/// Decode `input` and validate it as a COSE_Sign1 envelope.
pub fn parse_cose_sign1(input: &[u8], options: &DecodeOptions) -> Result<CoseSign1Envelope, CoseDecodeError> {
    let item = decode_cbor_value(input)?;
    debug!(len = input.len(), kind = item.type_name(), "decoded CBOR data item");
    cose_sign1_from_value(item, options)
}

/// Validate an already decoded CBOR item as a COSE_Sign1 envelope.
pub fn cose_sign1_from_value(item: CborValue, options: &DecodeOptions) -> Result<CoseSign1Envelope, CoseDecodeError> {
    let (tagged, content) = match item {
        CborValue::Tag(COSE_SIGN1_TAG, inner) => (true, *inner),
        CborValue::Tag(other, _) => return Err(CoseDecodeError::UnexpectedTag(other)),
        untagged => {
            if options.tag_policy == TagPolicy::Required {
                return Err(CoseDecodeError::MissingTag);
            }
            (false, untagged)
        }
    };
    debug!(tagged, "checked COSE_Sign1 tag");

    // COSE_Sign1 = [ protected, unprotected, payload, signature ]
    let elements = match content {
        CborValue::Array(elements) => elements,
        _ => return Err(CoseDecodeError::MissingUnprotectedHeader),
    };
    let element_count = elements.len();

    let mut elements = elements.into_iter();
    let (Some(protected), Some(unprotected)) = (elements.next(), elements.next()) else {
        return Err(CoseDecodeError::MissingUnprotectedHeader);
    };

    let entries = match unprotected {
        CborValue::Map(entries) => entries,
        other => {
            return Err(CoseDecodeError::InvalidUnprotectedHeader(format!(
                "expected a map, found {}",
                other.type_name()
            )))
        }
    };
    let unprotected = CoseHeaderMap::from_entries(entries)?;
    debug!(element_count, labels = unprotected.len(), "located unprotected header map");

    Ok(CoseSign1Envelope {
        tagged,
        protected,
        unprotected,
        payload: elements.next(),
        signature: elements.next(),
    })
}
