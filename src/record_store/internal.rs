use std::ffi::OsString;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use log::{debug, error, trace, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::lib_constants::TMP_FILENAME_INFIX;
use crate::record_store::errors::RecordStoreError;
use io_trait::{ProductionRecordStoreIo, RecordStoreIo};

pub(super) mod io_trait;

pub type RecordStore<R> = RecordStoreImpl<R, ProductionRecordStoreIo>;

pub struct RecordStoreImpl<R, Io: RecordStoreIo> {
    io: Io,
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> R>,
}

impl<R> RecordStore<R>
where
    R: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::new_internal(path.into(), ProductionRecordStoreIo::new())
    }
}

impl<R, Io> RecordStoreImpl<R, Io>
where
    R: Serialize + DeserializeOwned + Send + Sync,
    Io: RecordStoreIo,
{
    pub fn new_internal(path: PathBuf, io: Io) -> Self {
        debug!("creating record store at \"{}\"", path.display());
        RecordStoreImpl {
            io,
            path,
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty collection, anything else unreadable is
    /// an error.
    pub async fn load(&self) -> Result<Vec<R>, RecordStoreError> {
        debug!("loading records from \"{}\"", self.path.display());
        let bytes = match self.io.read_file(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "\"{}\" does not exist, no records yet",
                    self.path.display(),
                );
                return Ok(Vec::new());
            },
            Err(e) => return Err(
                RecordStoreError::Read {
                    path: self.path.clone(),
                    source: e,
                }
            ),
        };
        trace!(
            "read {} bytes from \"{}\"",
            bytes.len(),
            self.path.display(),
        );
        serde_json::from_slice(&bytes)
            .map_err(|e| RecordStoreError::Parse {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Like [`Self::load`], but a store that cannot be read is reported
    /// as empty.
    pub async fn load_or_empty(&self) -> Vec<R> {
        self.load()
            .await
            .unwrap_or_else(|e| {
                warn!("{e}, treating the store as empty");
                Vec::new()
            })
    }

    pub async fn save(&self, records: &[R]) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_records(records).await
    }

    /// Runs one load-modify-save cycle under the store's writer lock.
    /// Nothing is written when `modify` fails, or when the store cannot
    /// be loaded in the first place.
    pub async fn update<T, E, F>(&self, modify: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<R>) -> Result<T, E> + Send,
        E: From<RecordStoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let result = modify(&mut records)?;
        self.write_records(&records).await?;
        Ok(result)
    }

    async fn write_records(&self, records: &[R]) -> Result<(), RecordStoreError> {
        let serialized = serde_json::to_vec_pretty(records)
            .map_err(RecordStoreError::Serialize)?;
        let tmp_path = self.get_tmp_path();
        debug!(
            "writing {} records to \"{}\"",
            records.len(),
            self.path.display(),
        );
        trace!("tmp filename: \"{}\"", tmp_path.display());
        if let Err(e) = self.io.write_file(&tmp_path, &serialized).await {
            error!(
                "failed to write tmp file \"{}\": {e}",
                tmp_path.display(),
            );
            self.discard_tmp_file(&tmp_path).await;
            return Err(
                RecordStoreError::Write {
                    path: tmp_path,
                    source: e,
                }
            );
        }
        trace!(
            "renaming tmp file \"{}\" to \"{}\"",
            tmp_path.display(),
            self.path.display(),
        );
        if let Err(e) = self.io.rename_file(&tmp_path, &self.path).await {
            error!(
                "failed to rename tmp file \"{}\": {e}",
                tmp_path.display(),
            );
            self.discard_tmp_file(&tmp_path).await;
            return Err(
                RecordStoreError::Write {
                    path: self.path.clone(),
                    source: e,
                }
            );
        }
        Ok(())
    }

    async fn discard_tmp_file(&self, tmp_path: &Path) {
        match self.io.remove_file(tmp_path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => error!(
                "failed to remove tmp file \"{}\": {e}",
                tmp_path.display(),
            ),
        }
    }

    fn get_tmp_path(&self) -> PathBuf {
        let mut file_name = self.path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        file_name.push(TMP_FILENAME_INFIX);
        file_name.push(self.io.generate_uuid().hyphenated().to_string());
        self.path.with_file_name(file_name)
    }
}
