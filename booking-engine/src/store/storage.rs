//! redb-backed dataset store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `datasets` | dataset name | JSON bytes | One whole collection per key |
//!
//! Every write replaces the full dataset in a single transaction; redb's
//! copy-on-write commit keeps the file consistent if the process dies
//! mid-write.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for datasets: key = dataset name, value = JSON-serialized collection
const DATASETS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("datasets");

/// Logical dataset names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    Orders,
    Customers,
    Staff,
    TablePrices,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 4] = [
        DatasetKey::Orders,
        DatasetKey::Customers,
        DatasetKey::Staff,
        DatasetKey::TablePrices,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Orders => "orders",
            DatasetKey::Customers => "customers",
            DatasetKey::Staff => "staff",
            DatasetKey::TablePrices => "tablePrices",
        }
    }
}

impl std::fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::Storage(redb::StorageError::Corrupted(_))
            | StorageError::Serialization(_) => ErrorCode::StorageCorrupted,
            _ => ErrorCode::DatabaseError,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Byte-level key/value persistence used by the booking controller
///
/// Implementors only provide raw reads and writes. The typed helpers never
/// fail on read: an absent or undecodable dataset yields the caller's
/// default so a damaged file cannot block startup.
pub trait KeyValueStore {
    fn read_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    fn write_bytes(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Read and decode a dataset, falling back to `default`
    fn read_or<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        match self.read_bytes(key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(dataset = %key, error = %e, "Stored dataset is unreadable, using default");
                    default
                }
            },
            Ok(None) => {
                tracing::debug!(dataset = %key, "Dataset not stored yet, using default");
                default
            }
            Err(e) => {
                tracing::warn!(dataset = %key, error = %e, "Failed to read dataset, using default");
                default
            }
        }
    }

    /// Encode a dataset as JSON and write it
    fn write_json<T>(&self, key: &str, value: &T) -> StorageResult<()>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.write_bytes(key, &bytes)
    }
}

/// Local dataset store backed by redb
#[derive(Clone)]
pub struct LocalStore {
    db: Arc<Database>,
}

impl LocalStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open a database that lives only in memory
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DATASETS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Number of stored datasets
    pub fn len(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DATASETS_TABLE)?;
        Ok(table.len()?)
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for LocalStore {
    fn read_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DATASETS_TABLE)?;

        Ok(table.get(key)?.map(|value| value.value().to_vec()))
    }

    fn write_bytes(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DATASETS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        tracing::debug!(dataset = %key, bytes = value.len(), "Dataset written");
        Ok(())
    }
}
