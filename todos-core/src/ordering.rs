//! Display ordering for lists and todos.
//!
//! Items are split into an incomplete group and a complete group, each keeping
//! its insertion order, and the incomplete group is shown first. Every item is
//! returned together with its original index, which is what URLs address.

use crate::models::{Todo, TodoList};

/// Stable two-bucket partition: incomplete items first, then complete ones.
pub fn partition_by_completion<T>(
    items: &[T],
    is_complete: impl Fn(&T) -> bool,
) -> Vec<(&T, usize)> {
    let (complete, incomplete): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item, index))
        .partition(|&(item, _)| is_complete(item));

    incomplete.into_iter().chain(complete).collect()
}

/// Lists in display order. Empty lists count as incomplete.
pub fn sort_lists(lists: &[TodoList]) -> Vec<(&TodoList, usize)> {
    partition_by_completion(lists, TodoList::is_complete)
}

/// Todos in display order.
pub fn sort_todos(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    partition_by_completion(todos, |todo| todo.completed)
}
