//! JSON snapshot of the tableware collection.
//!
//! The whole collection is rewritten after every mutation. The file is small and the write
//! goes through a temporary sibling followed by a rename, so a crash mid-write leaves the
//! previous snapshot intact.

use crate::domain::Tableware;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Result type for snapshot operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Duplicate id {0} in snapshot")]
    DuplicateId(i32),

    #[error("No id left to assign after {0}")]
    IdSpaceExhausted(i32),
}

/// On-disk layout of the snapshot file.
#[derive(Serialize, Deserialize, Debug)]
pub struct SnapshotData {
    /// Id the next created record will receive.
    pub next_id: i32,
    pub records: Vec<Tableware>,
    pub saved_at: DateTime<Utc>,
}

/// Handle on the snapshot file location.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is an empty collection, not an error.
    pub async fn load(&self) -> StoreResult<Option<SnapshotData>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let data: SnapshotData =
            serde_json::from_str(&content).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        let mut seen = std::collections::HashSet::with_capacity(data.records.len());
        for r in &data.records {
            if !seen.insert(r.id) {
                return Err(StoreError::DuplicateId(r.id));
            }
        }

        Ok(Some(data))
    }

    pub async fn save(&self, next_id: i32, records: &[Tableware]) -> StoreResult<()> {
        let data = SnapshotData {
            next_id,
            records: records.to_vec(),
            saved_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&data)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content).await.map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
