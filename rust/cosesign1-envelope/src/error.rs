// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Failures raised while decoding a COSE_Sign1 envelope.
///
/// Every variant is terminal for the input that produced it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoseDecodeError {
    /// The bytes are not exactly one well-formed CBOR data item.
    #[error("malformed CBOR input: {0}")]
    MalformedInput(String),

    /// The top-level item carries a tag other than COSE_Sign1 (18).
    #[error("unexpected CBOR tag {0} (expected COSE_Sign1 tag 18)")]
    UnexpectedTag(u64),

    /// The top-level item is untagged but the tag is required.
    #[error("COSE_Sign1 tag 18 is required but the input is untagged")]
    MissingTag,

    /// The envelope is not an array with at least the protected and
    /// unprotected header elements.
    #[error("COSE signature envelope missing unprotected header")]
    MissingUnprotectedHeader,

    /// Element 1 of the envelope is not a usable header map.
    #[error("invalid unprotected header: {0}")]
    InvalidUnprotectedHeader(String),
}

impl From<minicbor::decode::Error> for CoseDecodeError {
    fn from(e: minicbor::decode::Error) -> Self {
        CoseDecodeError::MalformedInput(e.to_string())
    }
}
