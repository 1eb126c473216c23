use crate::components::todo_row::{TodoRow, item_row, placeholder_row};
use crate::core::todo::Todo;

/// Order items for display: ascending priority, ties in stored order.
pub fn sort_by_prio(items: &[Todo]) -> Vec<&Todo> {
    let mut sorted: Vec<&Todo> = items.iter().collect();
    // `sort_by` is stable, so equal priorities keep their relative order.
    sorted.sort_by(|a, b| a.prio.cmp(&b.prio));
    sorted
}

/// Rebuild every row from scratch.
pub fn todo_rows(items: &[Todo]) -> Vec<TodoRow> {
    if items.is_empty() {
        return vec![placeholder_row()];
    }
    sort_by_prio(items).into_iter().map(item_row).collect()
}
