//! The tableware service.
//!
//! Sole owner of the tableware collection. Reads share the lock, mutations take it
//! exclusively, so id assignment and replace/delete on the same id are serialized.
//! When a snapshot file is configured, every successful mutation is written to it before
//! the lock is released; a failed write rolls the in-memory change back.

use crate::domain::{Lookup, Tableware};
use crate::storage::{SnapshotFile, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

struct Collection {
    records: BTreeMap<i32, Tableware>,
    /// Id handed out by the next `add`. Never reused after a delete.
    next_id: i32,
}

impl Collection {
    fn empty() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Fails when the highest id leaves no room for another one.
    fn from_records(records: Vec<Tableware>, next_id: i32) -> StoreResult<Self> {
        let records: BTreeMap<i32, Tableware> = records.into_iter().map(|r| (r.id, r)).collect();
        let after_max = match records.keys().next_back() {
            Some(&max) => max.checked_add(1).ok_or(StoreError::IdSpaceExhausted(max))?,
            None => 1,
        };
        Ok(Self {
            records,
            next_id: next_id.max(after_max).max(1),
        })
    }

    fn to_vec(&self) -> Vec<Tableware> {
        self.records.values().cloned().collect()
    }
}

pub struct TablewareService {
    collection: RwLock<Collection>,
    snapshot: Option<SnapshotFile>,
}

impl TablewareService {
    /// Empty collection that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            collection: RwLock::new(Collection::empty()),
            snapshot: None,
        }
    }

    /// In-memory collection seeded with `records`. Ids are kept as given; a later record
    /// with an id already seen replaces the earlier one.
    pub fn with_records(records: Vec<Tableware>) -> StoreResult<Self> {
        Ok(Self {
            collection: RwLock::new(Collection::from_records(records, 1)?),
            snapshot: None,
        })
    }

    /// Collection backed by a JSON snapshot at `path`. Starts empty if the file is absent.
    pub async fn with_snapshot(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let snapshot = SnapshotFile::new(path);
        let collection = match snapshot.load().await? {
            Some(data) => {
                tracing::info!(
                    path = %snapshot.path().display(),
                    records = data.records.len(),
                    saved_at = %data.saved_at,
                    "loaded tableware snapshot"
                );
                Collection::from_records(data.records, data.next_id)?
            }
            None => {
                tracing::info!(path = %snapshot.path().display(), "no snapshot found, starting empty");
                Collection::empty()
            }
        };
        Ok(Self {
            collection: RwLock::new(collection),
            snapshot: Some(snapshot),
        })
    }

    pub async fn len(&self) -> usize {
        self.collection.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// All records in ascending id order, which is also insertion order.
    pub async fn get_all(&self) -> Vec<Tableware> {
        self.collection.read().await.to_vec()
    }

    pub async fn get_by_id(&self, id: i32) -> Lookup<Tableware> {
        self.collection.read().await.records.get(&id).cloned().into()
    }

    /// Stores `record` under a freshly assigned id and returns the stored copy.
    ///
    /// Fails without touching the collection once the id space is used up.
    pub async fn add(&self, mut record: Tableware) -> anyhow::Result<Tableware> {
        let mut col = self.collection.write().await;
        let id = col.next_id;
        let next_id = id.checked_add(1).ok_or(StoreError::IdSpaceExhausted(id))?;
        record.id = id;
        col.records.insert(id, record.clone());
        col.next_id = next_id;

        if let Err(e) = self.persist(&col).await {
            col.records.remove(&id);
            col.next_id = id;
            return Err(e.into());
        }
        tracing::debug!(id, "tableware added");
        Ok(record)
    }

    /// Replaces the content stored at `id`. The stored id is always `id`, whatever the
    /// payload says. A missing id is reported as `NotFound` and nothing is inserted.
    pub async fn update(&self, id: i32, mut record: Tableware) -> anyhow::Result<Lookup<Tableware>> {
        let mut col = self.collection.write().await;
        let Some(slot) = col.records.get_mut(&id) else {
            return Ok(Lookup::NotFound);
        };
        record.id = id;
        let previous = std::mem::replace(slot, record.clone());

        if let Err(e) = self.persist(&col).await {
            col.records.insert(id, previous);
            return Err(e.into());
        }
        tracing::debug!(id, "tableware updated");
        Ok(Lookup::Found(record))
    }

    pub async fn exists_by_id(&self, id: i32) -> bool {
        self.collection.read().await.records.contains_key(&id)
    }

    /// Removes the record at `id` and returns it.
    pub async fn delete(&self, id: i32) -> anyhow::Result<Lookup<Tableware>> {
        let mut col = self.collection.write().await;
        let Some(removed) = col.records.remove(&id) else {
            return Ok(Lookup::NotFound);
        };

        if let Err(e) = self.persist(&col).await {
            col.records.insert(id, removed);
            return Err(e.into());
        }
        tracing::debug!(id, "tableware deleted");
        Ok(Lookup::Found(removed))
    }

    /// Records whose type equals `kind` exactly (case-sensitive).
    pub async fn search_by_type(&self, kind: &str) -> Vec<Tableware> {
        self.collection
            .read()
            .await
            .records
            .values()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    pub async fn is_exist_by_name_and_material(&self, name: &str, material: &str) -> bool {
        self.collection
            .read()
            .await
            .records
            .values()
            .any(|r| r.name == name && r.material == material)
    }

    async fn persist(&self, col: &Collection) -> StoreResult<()> {
        match &self.snapshot {
            Some(snapshot) => snapshot.save(col.next_id, &col.to_vec()).await,
            None => Ok(()),
        }
    }
}

impl Default for TablewareService {
    fn default() -> Self {
        Self::in_memory()
    }
}
