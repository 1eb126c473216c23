use std::path::PathBuf;

use crate::core::todo::{NewTodo, PrioValue, Todo};

use super::{FileStore, StoreError, parse_id};

/// The to-do collection, the single source of truth for the list view.
pub struct ListStore {
    records: FileStore<Todo>,
}

impl ListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: FileStore::new(path),
        }
    }

    /// Validate and append a new to-do. Returns the acknowledgment shown as
    /// the page heading.
    pub async fn create(&self, draft: NewTodo) -> Result<String, StoreError> {
        draft.validate().map_err(StoreError::Validation)?;

        let todo = Todo::new(draft.owner.trim(), draft.todo.trim());
        let message = format!("Added \"{}\" for {}", todo.todo, todo.owner);
        let id = todo.id;

        self.records
            .modify(move |todos| {
                todos.push(todo);
                Ok(())
            })
            .await?;

        log::debug!(id:% = id; "created todo");
        Ok(message)
    }

    pub async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        self.records.load().await
    }

    /// Flip `checked` on the matching to-do. Returns the matching subset,
    /// empty when the id is unknown.
    pub async fn update_checked(&self, id: &str) -> Result<Vec<Todo>, StoreError> {
        let wanted = parse_id(id);
        self.records
            .modify(|todos| {
                Ok(todos
                    .iter_mut()
                    .filter(|t| Some(t.id) == wanted)
                    .map(|t| {
                        t.toggle();
                        t.clone()
                    })
                    .collect())
            })
            .await
    }

    /// Set the priority of the matching to-do. Values outside 1..=3 are
    /// rejected before the file is touched.
    pub async fn update_priority(&self, id: &str, prio: &PrioValue) -> Result<Vec<Todo>, StoreError> {
        let prio = prio.parse()?;
        let wanted = parse_id(id);
        self.records
            .modify(|todos| {
                Ok(todos
                    .iter_mut()
                    .filter(|t| Some(t.id) == wanted)
                    .map(|t| {
                        t.prio = prio;
                        t.clone()
                    })
                    .collect())
            })
            .await
    }

    /// Remove the matching to-do and return the remaining collection.
    pub async fn delete(&self, id: &str) -> Result<Vec<Todo>, StoreError> {
        self.records.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::todo::Priority;
    use crate::store::test_support::seeded_file;

    async fn store_with(labels: &[(&str, &str)]) -> (tempfile::TempDir, ListStore) {
        let (dir, path) = seeded_file("todos.json");
        let store = ListStore::new(path);
        for (owner, todo) in labels {
            store.create(NewTodo::new(*owner, *todo)).await.unwrap();
        }
        (dir, store)
    }

    #[tokio::test]
    async fn create_then_list_scenario() {
        let (_dir, store) = store_with(&[]).await;

        let message = store.create(NewTodo::new("Ann", "Buy milk")).await.unwrap();
        assert!(message.contains("Buy milk"));
        assert!(message.contains("Ann"));

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].owner, "Ann");
        assert_eq!(todos[0].todo, "Buy milk");
        assert!(!todos[0].checked);
        assert_eq!(todos[0].prio, Priority::Third);

        let id = todos[0].id.to_string();
        store.update_priority(&id, &PrioValue::Number(1)).await.unwrap();
        assert_eq!(store.list().await.unwrap()[0].prio, Priority::First);

        let remaining = store.delete(&id).await.unwrap();
        assert!(remaining.is_empty());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let (_dir, store) = store_with(&[("Ann", "a"), ("Bob", "b")]).await;
        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert_ne!(todos[0].id, todos[1].id);
    }

    #[tokio::test]
    async fn invalid_create_does_not_touch_the_store() {
        let (_dir, store) = store_with(&[("Ann", "Buy milk")]).await;

        for draft in [NewTodo::new("", "x"), NewTodo::new("Ann", ""), NewTodo::default()] {
            let err = store.create(draft).await.unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn toggle_twice_restores_checked() {
        let (_dir, store) = store_with(&[("Ann", "Buy milk")]).await;
        let id = store.list().await.unwrap()[0].id.to_string();

        let touched = store.update_checked(&id).await.unwrap();
        assert_eq!(touched.len(), 1);
        assert!(touched[0].checked);
        assert!(store.list().await.unwrap()[0].checked);

        store.update_checked(&id).await.unwrap();
        assert!(!store.list().await.unwrap()[0].checked);
    }

    #[tokio::test]
    async fn toggle_unknown_id_returns_empty_subset() {
        let (_dir, store) = store_with(&[("Ann", "Buy milk")]).await;
        let touched = store.update_checked("missing").await.unwrap();
        assert!(touched.is_empty());
        assert!(!store.list().await.unwrap()[0].checked);
    }

    #[tokio::test]
    async fn out_of_range_priority_is_rejected_without_mutation() {
        let (_dir, store) = store_with(&[("Ann", "Buy milk")]).await;
        let id = store.list().await.unwrap()[0].id.to_string();

        for bad in [PrioValue::Number(4), PrioValue::Number(0), PrioValue::Text("urgent".into())] {
            let err = store.update_priority(&id, &bad).await.unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(store.list().await.unwrap()[0].prio, Priority::Third);
    }

    #[tokio::test]
    async fn priority_accepts_string_from_dropdown() {
        let (_dir, store) = store_with(&[("Ann", "Buy milk")]).await;
        let id = store.list().await.unwrap()[0].id.to_string();

        let touched = store.update_priority(&id, &PrioValue::Text("2".into())).await.unwrap();
        assert_eq!(touched[0].prio, Priority::Second);
    }

    #[tokio::test]
    async fn delete_keeps_others_in_order() {
        let (_dir, store) = store_with(&[("a", "1"), ("b", "2"), ("c", "3")]).await;
        let before = store.list().await.unwrap();

        let remaining = store.delete(&before[1].id.to_string()).await.unwrap();
        assert_eq!(remaining, vec![before[0].clone(), before[2].clone()]);
        assert_eq!(store.list().await.unwrap(), remaining);
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_everything() {
        let (_dir, store) = store_with(&[("a", "1"), ("b", "2")]).await;
        let remaining = store.delete(&uuid::Uuid::new_v4().to_string()).await.unwrap();
        assert_eq!(remaining.len(), 2);
    }
}
