use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    First,
    Second,
    Third,
}

impl Priority {
    /// Options offered by the priority dropdown, in display order.
    pub const ALL: [Priority; 3] = [Self::First, Self::Second, Self::Third];

    pub fn as_number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Third
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n.into()).ok_or_else(|| format!("priority {n} is not one of 1, 2, 3"))
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.as_number()
    }
}

/// A single entry of the to-do list as stored on disk and sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub owner: String,
    pub todo: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub prio: Priority,
}

impl Todo {
    pub fn new(owner: impl Into<String>, todo: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            todo: todo.into(),
            checked: false,
            prio: Priority::default(),
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// The label shown in the list, `owner - todo`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.owner, self.todo)
    }
}

/// The fields a user submits to create a to-do. Missing fields decode as empty
/// so that they fail validation instead of the body parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub todo: String,
}

impl NewTodo {
    pub fn new(owner: impl Into<String>, todo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            todo: todo.into(),
        }
    }

    /// Both the list view and the store run this check before a create.
    pub fn validate(&self) -> Result<(), String> {
        if self.owner.trim().is_empty() {
            return Err("No owner set".to_string());
        }
        if self.todo.trim().is_empty() {
            return Err("No task set".to_string());
        }
        Ok(())
    }
}

/// A priority as it arrives from a client: browsers send the dropdown value
/// as a string, other clients send a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrioValue {
    Number(i64),
    Text(String),
}

impl PrioValue {
    pub fn parse(&self) -> Result<Priority, StoreError> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| StoreError::validation(format!("Priority '{}' is not a number", s)))?,
        };
        Priority::from_number(n)
            .ok_or_else(|| StoreError::validation(format!("Priority must be between 1 and 3, got {}", n)))
    }
}

impl From<Priority> for PrioValue {
    fn from(p: Priority) -> Self {
        Self::Number(p.as_number().into())
    }
}

impl From<i64> for PrioValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Body of `PUT /todo/prio/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioUpdate {
    pub prio: Option<PrioValue>,
}
