// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use tracing::trace;

/// SHA-256 digest of one certificate's raw encoded bytes.
///
/// Displays and serializes as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thumbprint([u8; 32]);

impl Thumbprint {
    pub fn of(cert_der: &[u8]) -> Self {
        Self(Sha256::digest(cert_der).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Thumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Thumbprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Thumbprint every certificate in `chain`, keeping order and count.
pub fn thumbprints<I>(chain: I) -> Vec<Thumbprint>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    chain
        .into_iter()
        .enumerate()
        .map(|(index, cert)| {
            let thumbprint = Thumbprint::of(cert.as_ref());
            trace!(index, %thumbprint, "certificate thumbprint");
            thumbprint
        })
        .collect()
}
