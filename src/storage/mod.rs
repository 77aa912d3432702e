pub mod snapshot;

pub use snapshot::{SnapshotData, SnapshotFile, StoreError, StoreResult};
