use std::future::Future;

use uuid::Uuid;

use crate::core::todo::{NewTodo, PrioValue, Todo};
use crate::store::{ListStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid server url {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with an error status. `message` is its `{error}` text.
    #[error("{message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The operations the list view needs from wherever the list lives.
pub trait TodoBackend {
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, ClientError>> + Send;

    /// Returns the acknowledgment message.
    fn create(&self, draft: &NewTodo) -> impl Future<Output = Result<String, ClientError>> + Send;

    fn toggle_checked(&self, id: Uuid) -> impl Future<Output = Result<Vec<Todo>, ClientError>> + Send;

    fn set_priority(
        &self,
        id: Uuid,
        prio: &PrioValue,
    ) -> impl Future<Output = Result<Vec<Todo>, ClientError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<Vec<Todo>, ClientError>> + Send;
}

/// Drive a store in-process, without HTTP in between.
impl TodoBackend for ListStore {
    async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        Ok(ListStore::list(self).await?)
    }

    async fn create(&self, draft: &NewTodo) -> Result<String, ClientError> {
        Ok(ListStore::create(self, draft.clone()).await?)
    }

    async fn toggle_checked(&self, id: Uuid) -> Result<Vec<Todo>, ClientError> {
        Ok(self.update_checked(&id.to_string()).await?)
    }

    async fn set_priority(&self, id: Uuid, prio: &PrioValue) -> Result<Vec<Todo>, ClientError> {
        Ok(self.update_priority(&id.to_string(), prio).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<Vec<Todo>, ClientError> {
        Ok(ListStore::delete(self, &id.to_string()).await?)
    }
}
