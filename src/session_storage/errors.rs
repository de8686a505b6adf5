use thiserror::Error;
use crate::record_store::RecordStoreError;

#[derive(Debug, Error)]
pub enum SessionStorageError {
    #[error("session table unavailable: {0}")]
    Store(#[from] RecordStoreError),

    #[error("session lifetime of {0} overflows the expiry date")]
    LifetimeOverflow(time::Duration),
}
