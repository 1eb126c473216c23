use serde::{Deserialize, Serialize};

/// Message returned to callers when an internal error is hidden from them.
pub const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReply {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}
