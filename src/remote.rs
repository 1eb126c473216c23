use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::backend::{ClientError, TodoBackend};
use crate::core::name::{Greeting, NameEntry};
use crate::core::reply::{ErrorReply, MessageReply};
use crate::core::todo::{NewTodo, PrioUpdate, PrioValue, Todo};

/// HTTP client for a running list server.
#[derive(Clone)]
pub struct HttpBackend {
    base: Url,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let http = Client::builder().build()?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`: the base URL can carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Decode a success body, or turn an error status into a
    /// [`ClientError::Status`] carrying the server's message.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorReply>().await {
                Ok(body) => body.error,
                Err(_) => format!("server returned {}", status),
            };
            log::debug!(status = status.as_u16(), message = message.as_str(); "request rejected");
            return Err(ClientError::Status { status, message });
        }
        Ok(resp.json().await?)
    }

    /// `POST /hello/:name`. Returns the greeting.
    pub async fn greet(&self, name: &str, last_name: Option<&str>) -> Result<String, ClientError> {
        let body = Greeting {
            last_name: last_name.map(str::to_string),
        };
        let resp = self
            .http
            .post(self.endpoint(&["hello", name]))
            .json(&body)
            .send()
            .await?;
        let reply: MessageReply = Self::decode(resp).await?;
        Ok(reply.message)
    }

    /// `GET /names`.
    pub async fn names(&self) -> Result<Vec<NameEntry>, ClientError> {
        let resp = self.http.get(self.endpoint(&["names"])).send().await?;
        Self::decode(resp).await
    }

    /// `DELETE /delete/:id`. Returns the remaining names.
    pub async fn delete_name(&self, id: Uuid) -> Result<Vec<NameEntry>, ClientError> {
        let id = id.to_string();
        let resp = self.http.delete(self.endpoint(&["delete", &id])).send().await?;
        Self::decode(resp).await
    }
}

impl TodoBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let resp = self.http.get(self.endpoint(&["todos"])).send().await?;
        Self::decode(resp).await
    }

    async fn create(&self, draft: &NewTodo) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(self.endpoint(&["todo"]))
            .json(draft)
            .send()
            .await?;
        let reply: MessageReply = Self::decode(resp).await?;
        Ok(reply.message)
    }

    async fn toggle_checked(&self, id: Uuid) -> Result<Vec<Todo>, ClientError> {
        let id = id.to_string();
        let resp = self
            .http
            .put(self.endpoint(&["todo", "checked", &id]))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn set_priority(&self, id: Uuid, prio: &PrioValue) -> Result<Vec<Todo>, ClientError> {
        let id = id.to_string();
        let body = PrioUpdate {
            prio: Some(prio.clone()),
        };
        let resp = self
            .http
            .put(self.endpoint(&["todo", "prio", &id]))
            .json(&body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn delete(&self, id: Uuid) -> Result<Vec<Todo>, ClientError> {
        let id = id.to_string();
        let resp = self
            .http
            .delete(self.endpoint(&["todo", "delete", &id]))
            .send()
            .await?;
        Self::decode(resp).await
    }
}
