// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decoding of COSE_Sign1 envelopes (RFC 8152) into typed values.
//!
//! Raw bytes are first decoded into a generic [`CborValue`] tree. The envelope
//! structure is then checked with pattern matches over that tree, so every
//! access either yields a typed value or a [`CoseDecodeError`].

pub mod cbor_value;
pub mod cose_sign1;
pub mod decode_options;
pub mod error;
pub mod header_map;

pub use cbor_value::{decode_cbor_value, CborValue, MAX_NESTING_DEPTH};
pub use cose_sign1::{cose_sign1_from_value, parse_cose_sign1, CoseSign1Envelope, COSE_SIGN1_TAG};
pub use decode_options::{DecodeOptions, TagPolicy};
pub use error::CoseDecodeError;
pub use header_map::{CoseHeaderMap, HeaderKey};
