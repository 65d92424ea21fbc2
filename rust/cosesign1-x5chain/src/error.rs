// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use cosesign1_envelope::CoseDecodeError;

#[derive(thiserror::Error, Debug)]
pub enum ThumbprintError {
    #[error(transparent)]
    Decode(#[from] CoseDecodeError),

    #[error("COSE signature envelope unprotected header does not contain x5chain (label 33)")]
    MissingX5Chain,

    #[error("x5chain must be an array of byte strings: {0}")]
    InvalidX5ChainType(String),

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("envelope exceeds the {limit} byte input limit")]
    InputTooLarge { limit: usize },
}
