//! File-backed snapshot cache: the on-device tier.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CacheError, CacheResult};
use crate::traits::SnapshotCache;

/// A [`SnapshotCache`] that keeps one file per key under a directory.
///
/// Writes are atomic: the value lands in a temp file first and is renamed
/// over the target, so a crash mid-write never leaves a truncated entry.
#[derive(Debug)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Open (or create) a cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> CacheResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this cache writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> CacheResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(CacheError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotCache for FileCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let path = self.entry_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::Io(e)),
        }
    }

    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        let path = self.entry_path(key)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(&path).map_err(|e| CacheError::Io(e.error))?;
        debug!(key, bytes = value.len(), "cache entry written");
        Ok(())
    }
}
