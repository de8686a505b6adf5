//! JSON-array-in-a-file persistence for one record collection.
//!
//! Every write replaces the whole file: the collection is serialized to a
//! temporary sibling file which is then renamed over the original. All
//! read-modify-write cycles of one store go through [`RecordStoreImpl::update`],
//! which holds the store's writer lock for the whole cycle.

mod errors;
mod internal;

pub use errors::RecordStoreError;
pub use internal::{RecordStore, RecordStoreImpl};
pub use internal::io_trait::{ProductionRecordStoreIo, RecordStoreIo};
