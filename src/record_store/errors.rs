use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("failed to read \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        source: IoError,
    },

    #[error("\"{}\" does not hold a valid record array: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write \"{}\": {source}", path.display())]
    Write {
        path: PathBuf,
        source: IoError,
    },
}
