//! Whole-file JSON persistence.
//!
//! Every collection lives in one file holding a JSON array. Reads load the
//! entire array; mutations load it, transform it in memory and overwrite the
//! file with the result. Each store serializes its own read-modify-write
//! cycles through a mutex, so two requests against the same file cannot
//! interleave.

pub mod names;
pub mod todos;

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use uuid::Uuid;

pub use names::NameStore;
pub use todos::ListStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Caller-correctable input error. Its message is shown to the caller.
    #[error("{0}")]
    Validation(String),
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} does not hold a JSON array of records: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode records: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A record kept in a [`FileStore`].
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    fn id(&self) -> Uuid;
}

impl Record for crate::core::todo::Todo {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for crate::core::name::NameEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Ids arrive as path segments. One that is not a UUID matches no record.
pub fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

pub struct FileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    records: PhantomData<fn() -> T>,
}

impl<T: Record> FileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Run one read-modify-write cycle. Nothing is written when `f` fails.
    pub async fn modify<R>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        let out = f(&mut records)?;
        self.write(&records).await?;
        Ok(out)
    }

    /// Remove every record with the given id and return what is left.
    pub async fn remove(&self, id: &str) -> Result<Vec<T>, StoreError>
    where
        T: Clone,
    {
        let wanted = parse_id(id);
        self.modify(|records| {
            records.retain(|r| Some(r.id()) != wanted);
            Ok(records.clone())
        })
        .await
    }

    async fn read(&self) -> Result<Vec<T>, StoreError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
