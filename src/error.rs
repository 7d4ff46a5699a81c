use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuntError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode solver cache: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to decode solver cache: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl HuntError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HuntError::Io {
            path: path.into(),
            source,
        }
    }
}
