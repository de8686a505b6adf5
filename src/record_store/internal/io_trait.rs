use std::path::Path;
use async_trait::async_trait;
use tokio::{fs, io};
use uuid::Uuid;
use crate::rng::make_uuid;

#[async_trait]
pub trait RecordStoreIo: Send + Sync + 'static {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn generate_uuid(&self) -> Uuid;
}

#[derive(Debug, Default)]
pub struct ProductionRecordStoreIo;

impl ProductionRecordStoreIo {
    pub fn new() -> Self {
        ProductionRecordStoreIo
    }
}

#[async_trait]
impl RecordStoreIo for ProductionRecordStoreIo {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}
