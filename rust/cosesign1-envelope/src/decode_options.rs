// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// How the COSE_Sign1 tag (18) on the top-level item is treated.
///
/// A tag other than 18 is rejected under every policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TagPolicy {
    /// Untagged envelopes are accepted.
    #[default]
    Optional,
    /// Untagged envelopes are rejected with `MissingTag`.
    Required,
}

#[derive(Debug, Default, Clone)]
pub struct DecodeOptions {
    pub tag_policy: TagPolicy,
    /// Accept an `x5chain` header holding a single bstr instead of an array
    /// (RFC 9360 single-certificate form).
    pub allow_single_certificate: bool,
}
