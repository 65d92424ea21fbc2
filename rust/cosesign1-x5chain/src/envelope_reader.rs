// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::error::ThumbprintError;

/// Default cap on envelope size. COSE_Sign1 envelopes carrying a certificate
/// chain are small; anything past this is not a plausible input.
pub const DEFAULT_MAX_ENVELOPE_LEN: usize = 16 * 1024 * 1024;

/// Read a whole envelope file into memory.
///
/// The file is closed before this returns, on success and on error.
pub fn read_envelope(path: impl AsRef<Path>, max_len: usize) -> Result<Vec<u8>, ThumbprintError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ThumbprintError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ThumbprintError::Io {
            context: format!("failed to open {}", path.display()),
            source: e,
        },
    })?;

    let bytes = read_envelope_from_reader(file, max_len).map_err(|e| match e {
        ThumbprintError::Io { source, .. } => ThumbprintError::Io {
            context: format!("failed to read {}", path.display()),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read envelope");
    Ok(bytes)
}

/// Read all of `reader`, failing with `InputTooLarge` past `max_len` bytes.
pub fn read_envelope_from_reader(reader: impl Read, max_len: usize) -> Result<Vec<u8>, ThumbprintError> {
    // One byte past the limit is enough to detect oversize input.
    let cap = u64::try_from(max_len).unwrap_or(u64::MAX).saturating_add(1);

    let mut buf = Vec::new();
    reader
        .take(cap)
        .read_to_end(&mut buf)
        .map_err(|source| ThumbprintError::Io {
            context: "failed to read envelope".to_string(),
            source,
        })?;

    if buf.len() > max_len {
        return Err(ThumbprintError::InputTooLarge { limit: max_len });
    }
    Ok(buf)
}
