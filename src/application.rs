use uuid::Uuid;

use crate::backend::{ClientError, TodoBackend};
use crate::components::todo_row::TodoRow;
use crate::core::todo::{NewTodo, PrioValue, Todo};
use crate::message::Message;
use crate::pages::todos::todo_rows;

/// The to-do page: a mirror of the stored list plus the text typed so far.
///
/// Every action goes to the backend first and, once it succeeds, the whole
/// list is fetched again and the rows are rebuilt. A failed action leaves the
/// rows as they were and records the error text for display.
pub struct ListView<B> {
    backend: B,
    items: Vec<Todo>,
    rows: Vec<TodoRow>,
    owner_input: String,
    todo_input: String,
    heading: Option<String>,
    error: Option<String>,
}

impl<B: TodoBackend> ListView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            items: Vec::new(),
            rows: Vec::new(),
            owner_input: String::new(),
            todo_input: String::new(),
            heading: None,
            error: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The collection as last fetched, in stored order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// The rows as last rendered, in display order.
    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    pub fn owner_input(&self) -> &str {
        &self.owner_input
    }

    pub fn todo_input(&self) -> &str {
        &self.todo_input
    }

    /// The acknowledgment of the last successful submit.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn update(&mut self, message: Message) {
        match message {
            Message::OwnerInputChanged(value) => self.owner_input = value,
            Message::TodoInputChanged(value) => self.todo_input = value,
            Message::Submit => self.submit().await,
            Message::Refresh => self.refresh().await,
            Message::ToggleChecked(id) => self.toggle_checked(id).await,
            Message::SetPriority(id, value) => self.set_priority(id, value).await,
            Message::Remove(id) => self.remove(id).await,
        }
    }

    /// Fetch the full list and rebuild every row.
    pub async fn refresh(&mut self) {
        match self.backend.list().await {
            Ok(items) => {
                self.items = items;
                self.rows = todo_rows(&self.items);
            }
            Err(e) => {
                log::warn!(error:% = e; "failed to fetch todos");
                self.error = Some(e.to_string());
            }
        }
    }

    pub async fn submit(&mut self) {
        let draft = NewTodo::new(self.owner_input.clone(), self.todo_input.clone());
        if let Err(reason) = draft.validate() {
            self.error = Some(reason);
            return;
        }

        match self.backend.create(&draft).await {
            Ok(message) => {
                self.heading = Some(message);
                self.owner_input.clear();
                self.todo_input.clear();
                self.error = None;
                self.refresh().await;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn toggle_checked(&mut self, id: Uuid) {
        let result = self.backend.toggle_checked(id).await;
        self.after_action(result.map(drop)).await;
    }

    pub async fn set_priority(&mut self, id: Uuid, value: PrioValue) {
        let result = self.backend.set_priority(id, &value).await;
        self.after_action(result.map(drop)).await;
    }

    pub async fn remove(&mut self, id: Uuid) {
        let result = self.backend.delete(id).await;
        self.after_action(result.map(drop)).await;
    }

    async fn after_action(&mut self, result: Result<(), ClientError>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.refresh().await;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::todo_row::{EMPTY_MESSAGE, TodoRow};
    use crate::core::todo::Priority;
    use crate::store::ListStore;
    use crate::store::test_support::seeded_file;

    fn view() -> (tempfile::TempDir, ListView<ListStore>) {
        let (dir, path) = seeded_file("todos.json");
        (dir, ListView::new(ListStore::new(path)))
    }

    async fn add(view: &mut ListView<ListStore>, owner: &str, todo: &str) {
        view.update(Message::OwnerInputChanged(owner.into())).await;
        view.update(Message::TodoInputChanged(todo.into())).await;
        view.update(Message::Submit).await;
    }

    fn item_ids(view: &ListView<ListStore>) -> Vec<Uuid> {
        view.rows()
            .iter()
            .filter_map(|row| match row {
                TodoRow::Item(item) => Some(item.check_box.id),
                TodoRow::Placeholder(_) => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn refresh_of_empty_store_shows_placeholder() {
        let (_dir, mut view) = view();
        view.update(Message::Refresh).await;
        assert_eq!(view.rows(), &[TodoRow::Placeholder(EMPTY_MESSAGE.to_string())]);
    }

    #[tokio::test]
    async fn submit_creates_clears_drafts_and_rerenders() {
        let (_dir, mut view) = view();
        add(&mut view, "Ann", "Buy milk").await;

        assert_eq!(view.owner_input(), "");
        assert_eq!(view.todo_input(), "");
        assert!(view.heading().unwrap().contains("Buy milk"));
        assert_eq!(view.items().len(), 1);
        assert_eq!(item_ids(&view), vec![view.items()[0].id]);
        assert_eq!(view.error(), None);
    }

    #[tokio::test]
    async fn submit_with_missing_field_is_stopped_in_the_view() {
        let (_dir, mut view) = view();
        view.update(Message::TodoInputChanged("Buy milk".into())).await;
        view.update(Message::Submit).await;

        assert_eq!(view.error(), Some("No owner set"));
        assert_eq!(view.todo_input(), "Buy milk");
        assert!(view.backend().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn row_events_drive_the_store() {
        let (_dir, mut view) = view();
        add(&mut view, "Ann", "first").await;
        add(&mut view, "Bob", "second").await;

        let TodoRow::Item(row) = view.rows()[1].clone() else {
            panic!("expected an item row");
        };
        view.update(row.priority.on_change(Priority::First)).await;
        // The second entry moved to the top.
        assert_eq!(item_ids(&view)[0], row.check_box.id);

        view.update(row.check_box.on_click()).await;
        let TodoRow::Item(top) = &view.rows()[0] else {
            panic!("expected an item row");
        };
        assert!(top.check_box.checked);
        assert!(top.text.struck);

        view.update(row.delete.on_click()).await;
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].owner, "Ann");
    }

    #[tokio::test]
    async fn rejected_priority_keeps_rows_and_reports() {
        let (_dir, mut view) = view();
        add(&mut view, "Ann", "first").await;
        let id = view.items()[0].id;
        let before = view.rows().to_vec();

        view.update(Message::SetPriority(id, PrioValue::Number(4))).await;

        assert!(view.error().unwrap().contains("between 1 and 3"));
        assert_eq!(view.rows(), before.as_slice());
        assert_eq!(view.backend().list().await.unwrap()[0].prio, Priority::Third);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_rows() {
        let (_dir, path) = seeded_file("todos.json");
        let mut view = ListView::new(ListStore::new(&path));
        add(&mut view, "Ann", "first").await;
        let before = view.rows().to_vec();

        std::fs::write(&path, "not json").unwrap();
        view.update(Message::Refresh).await;

        assert!(view.error().is_some());
        assert_eq!(view.rows(), before.as_slice());
        assert_eq!(view.items().len(), 1);
    }
}
