use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry of the name list, created by a greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl NameEntry {
    pub fn new(name: impl Into<String>, last_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            last_name,
        }
    }

    pub fn full_name(&self) -> String {
        match self.last_name {
            Some(ref last) => format!("{} {}", self.name, last),
            None => self.name.clone(),
        }
    }
}

/// Optional body of `POST /hello/:name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    #[serde(default)]
    pub last_name: Option<String>,
}
