//! Persistence of rendered labels.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Failure to persist a label.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can persist label text at a destination.
pub trait LabelStore {
    fn store(&self, text: &str, destination: &Path) -> Result<(), StoreError>;
}

/// Writes labels to the local filesystem, creating parent directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        Self
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl LabelStore for FileSystemStore {
    fn store(&self, text: &str, destination: &Path) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: destination.to_path_buf(),
            source,
        };

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(destination, text).map_err(write_err)?;

        info!(path = %destination.display(), bytes = text.len(), "label written");
        Ok(())
    }
}
