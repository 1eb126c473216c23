use std::path::PathBuf;

use crate::core::name::NameEntry;

use super::{FileStore, StoreError};

/// The name list filled by greetings.
pub struct NameStore {
    records: FileStore<NameEntry>,
}

impl NameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: FileStore::new(path),
        }
    }

    /// Record a greeting and return `Hello, <name>`.
    pub async fn greet(&self, name: &str, last_name: Option<&str>) -> Result<String, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("No name set"));
        }
        let last_name = last_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let entry = NameEntry::new(name, last_name);
        let message = format!("Hello, {}", entry.full_name());

        self.records
            .modify(move |entries| {
                entries.push(entry);
                Ok(())
            })
            .await?;
        Ok(message)
    }

    pub async fn list(&self) -> Result<Vec<NameEntry>, StoreError> {
        self.records.load().await
    }

    pub async fn delete(&self, id: &str) -> Result<Vec<NameEntry>, StoreError> {
        self.records.remove(id).await
    }
}
