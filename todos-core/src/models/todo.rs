use serde::{Deserialize, Serialize};

/// A single item within a [`TodoList`](super::TodoList).
///
/// The name is fixed at creation; only `completed` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub name: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}
