use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes JSON documents into a single output directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Save `value` as pretty JSON under `filename`, replacing any previous file.
    ///
    /// The directory is created on first use. Returns the written path.
    pub fn save_json<T: Serialize + ?Sized>(
        &self,
        value: &T,
        filename: &str,
    ) -> Result<PathBuf, StorageError> {
        let path = self.dir.join(filename);
        let io_err = |source: std::io::Error| StorageError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let s = serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialize {
            path: path.clone(),
            source,
        })?;
        let mut f = File::create(&path).map_err(io_err)?;
        f.write_all(s.as_bytes()).map_err(io_err)?;
        log::debug!("wrote {} bytes to {}", s.len(), path.display());
        Ok(path)
    }
}
