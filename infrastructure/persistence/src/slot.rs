use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("slot.read_error")]
    ReadError,
    #[error("slot.write_error")]
    WriteError,
}

/// Configuration for the file-backed slot store
pub struct SlotStoreConfig {
    pub dir: PathBuf,
}

impl SlotStoreConfig {
    /// Creates a slot store configuration rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Durable key-value slots, one JSON file per key.
///
/// A slot always holds exactly one complete serialized blob. Writes go to a
/// temp file first and are renamed into place, so a reader never observes a
/// partially written value.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(config: SlotStoreConfig) -> Self {
        Self { dir: config.dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads the blob stored under `key`. Returns `None` when the slot has
    /// never been written.
    pub async fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        match tokio::fs::read_to_string(self.slot_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                debug!("failed to read slot {}: {}", key, e);
                Err(SlotError::ReadError)
            }
        }
    }

    /// Overwrites the blob stored under `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|_| SlotError::WriteError)?;

        let tmp = self.dir.join(format!("{}.json.tmp", key));
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|_| SlotError::WriteError)?;
        tokio::fs::rename(&tmp, self.slot_path(key))
            .await
            .map_err(|_| SlotError::WriteError)?;

        debug!("slot {} updated ({} bytes)", key, value.len());
        Ok(())
    }

    /// Deletes the blob stored under `key`. Clearing an absent slot is fine.
    pub async fn clear(&self, key: &str) -> Result<(), SlotError> {
        match tokio::fs::remove_file(self.slot_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(SlotError::WriteError),
        }
    }
}
