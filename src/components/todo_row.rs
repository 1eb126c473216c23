use std::fmt;

use uuid::Uuid;

use crate::core::todo::{Priority, Todo};
use crate::message::Message;

pub const EMPTY_MESSAGE: &str = "No todos available. Please create one!";

const DELETE_LABEL: &str = "X";

/// One rendered line of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoRow {
    Placeholder(String),
    Item(ItemRow),
}

/// The four segments of an item row, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub check_box: CheckBox,
    pub priority: PrioDropdown,
    pub text: TextColumn,
    pub delete: DeleteButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBox {
    pub id: Uuid,
    pub checked: bool,
}

impl CheckBox {
    pub fn on_click(&self) -> Message {
        Message::ToggleChecked(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioDropdown {
    pub id: Uuid,
    pub options: [Priority; 3],
    pub selected: Priority,
}

impl PrioDropdown {
    pub fn on_change(&self, value: Priority) -> Message {
        Message::SetPriority(self.id, value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColumn {
    pub text: String,
    /// Drawn with a line through it once the item is checked.
    pub struck: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteButton {
    pub id: Uuid,
    pub label: &'static str,
}

impl DeleteButton {
    pub fn on_click(&self) -> Message {
        Message::Remove(self.id)
    }
}

// --- Segment builders ---

pub fn check_box_column(todo: &Todo) -> CheckBox {
    CheckBox {
        id: todo.id,
        checked: todo.checked,
    }
}

pub fn prio_dropdown(todo: &Todo) -> PrioDropdown {
    PrioDropdown {
        id: todo.id,
        options: Priority::ALL,
        selected: todo.prio,
    }
}

pub fn text_column(todo: &Todo) -> TextColumn {
    TextColumn {
        text: todo.label(),
        struck: todo.checked,
    }
}

pub fn delete_button_column(id: Uuid) -> DeleteButton {
    DeleteButton {
        id,
        label: DELETE_LABEL,
    }
}

pub fn item_row(todo: &Todo) -> TodoRow {
    TodoRow::Item(ItemRow {
        check_box: check_box_column(todo),
        priority: prio_dropdown(todo),
        text: text_column(todo),
        delete: delete_button_column(todo.id),
    })
}

pub fn placeholder_row() -> TodoRow {
    TodoRow::Placeholder(EMPTY_MESSAGE.to_string())
}

// --- Terminal rendering ---

fn strike(text: &str) -> String {
    text.chars().flat_map(|c| [c, '\u{0336}']).collect()
}

impl fmt::Display for TodoRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder(message) => write!(f, "  {}", message),
            Self::Item(row) => {
                let mark = if row.check_box.checked { 'x' } else { ' ' };
                let text = if row.text.struck {
                    strike(&row.text.text)
                } else {
                    row.text.text.clone()
                };
                write!(
                    f,
                    "[{}] ({}) {}  [{}] {}",
                    mark, row.priority.selected, text, row.delete.label, row.check_box.id
                )
            }
        }
    }
}
