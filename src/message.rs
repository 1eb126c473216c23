use uuid::Uuid;

use crate::core::todo::PrioValue;

/// Everything a user can do to the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Drafts
    OwnerInputChanged(String),
    TodoInputChanged(String),
    Submit,

    Refresh,

    // Row events
    ToggleChecked(Uuid),
    SetPriority(Uuid, PrioValue),
    Remove(Uuid),
}
