use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// A named list of todos.
///
/// Names are unique within a session at the time they are set. Todos keep
/// insertion order; display order is computed by [`crate::ordering`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    /// Number of todos not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// A list is complete when it has at least one todo and none remaining.
    /// An empty list is never complete.
    pub fn is_complete(&self) -> bool {
        self.todos_count() > 0 && self.remaining_count() == 0
    }
}
