//! Persistent dataset store

mod storage;

pub use storage::{DatasetKey, KeyValueStore, LocalStore, StorageError, StorageResult};
