// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate chain thumbprints for COSE_Sign1 envelopes.
//!
//! The `x5chain` header (label 33) of the unprotected header map is read as
//! an ordered list of raw certificates and each one is hashed with SHA-256.
//! Nothing is verified: not the signature, not the certificates, not the
//! chain of trust.

mod api;
mod envelope_reader;
mod error;
mod thumbprint;
mod x5c_header;

pub use api::{cert_chain_thumbprints, cert_chain_thumbprints_from_file, decode, DecodedX5Chain};
pub use cosesign1_envelope::{CoseDecodeError, DecodeOptions, TagPolicy};
pub use envelope_reader::{read_envelope, read_envelope_from_reader, DEFAULT_MAX_ENVELOPE_LEN};
pub use error::ThumbprintError;
pub use thumbprint::{thumbprints, Thumbprint};
pub use x5c_header::{extract_x5chain, COSE_HEADER_X5CHAIN};
