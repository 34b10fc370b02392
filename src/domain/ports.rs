use crate::utils::error::Result;

/// Storage backend for snapshot artifacts. Paths are relative to the
/// backend's base location.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn snapshot_dir(&self) -> &str;
    fn digits(&self) -> Option<usize>;
    fn update_snapshots(&self) -> bool;
}
