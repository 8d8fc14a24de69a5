use serde::{Deserialize, Serialize};

use crate::error::{Target, TodoError};
use crate::models::{Todo, TodoList};
use crate::ordering;
use crate::validation::{validate_list_name, validate_todo};

/// All lists belonging to one session, in insertion order.
///
/// Every lifecycle operation on lists and todos goes through this type. Indices
/// are positional and are bounds-checked: an index past the end yields
/// [`TodoError::IndexOutOfRange`] and leaves the collection untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoLists {
    lists: Vec<TodoList>,
}

impl TodoLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn as_slice(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn get(&self, id: usize) -> Result<&TodoList, TodoError> {
        self.lists
            .get(id)
            .ok_or(TodoError::IndexOutOfRange(Target::List))
    }

    fn get_mut(&mut self, id: usize) -> Result<&mut TodoList, TodoError> {
        self.lists
            .get_mut(id)
            .ok_or(TodoError::IndexOutOfRange(Target::List))
    }

    fn todo_mut(&mut self, id: usize, index: usize) -> Result<&mut Todo, TodoError> {
        self.get_mut(id)?
            .todos
            .get_mut(index)
            .ok_or(TodoError::IndexOutOfRange(Target::Todo))
    }

    /// Lists in display order, paired with their positional ids.
    pub fn sorted(&self) -> Vec<(&TodoList, usize)> {
        ordering::sort_lists(&self.lists)
    }

    // ============================================================
    // List operations
    // ============================================================

    /// Append a new empty list and return its index.
    pub fn create_list(&mut self, name: &str) -> Result<usize, TodoError> {
        validate_list_name(name, &self.lists, None)?;
        self.lists.push(TodoList::new(name));
        tracing::debug!(name, "created list");
        Ok(self.lists.len() - 1)
    }

    /// Rename a list. Keeping the current name is allowed.
    pub fn rename_list(&mut self, id: usize, name: &str) -> Result<(), TodoError> {
        self.get(id)?;
        validate_list_name(name, &self.lists, Some(id))?;

        let list = self.get_mut(id)?;
        tracing::debug!(id, from = %list.name, to = name, "renamed list");
        list.name = name.to_string();
        Ok(())
    }

    /// Remove a list and all of its todos. Later lists shift down by one.
    pub fn delete_list(&mut self, id: usize) -> Result<TodoList, TodoError> {
        self.get(id)?;
        let removed = self.lists.remove(id);
        tracing::debug!(id, name = %removed.name, "deleted list");
        Ok(removed)
    }

    // ============================================================
    // Todo operations
    // ============================================================

    /// Append an incomplete todo to list `id` and return its index.
    pub fn add_todo(&mut self, id: usize, text: &str) -> Result<usize, TodoError> {
        let list = self.get_mut(id)?;
        validate_todo(text)?;
        list.todos.push(Todo::new(text));
        tracing::debug!(id, todo = text, "added todo");
        Ok(list.todos.len() - 1)
    }

    /// Remove a todo. Later todos in the same list shift down by one.
    pub fn delete_todo(&mut self, id: usize, index: usize) -> Result<Todo, TodoError> {
        let list = self.get_mut(id)?;
        if index >= list.todos.len() {
            return Err(TodoError::IndexOutOfRange(Target::Todo));
        }
        let removed = list.todos.remove(index);
        tracing::debug!(id, index, "deleted todo");
        Ok(removed)
    }

    pub fn set_completed(
        &mut self,
        id: usize,
        index: usize,
        completed: bool,
    ) -> Result<(), TodoError> {
        self.todo_mut(id, index)?.completed = completed;
        tracing::debug!(id, index, completed, "updated todo");
        Ok(())
    }

    /// Mark every todo in list `id` as completed.
    pub fn complete_all(&mut self, id: usize) -> Result<(), TodoError> {
        let list = self.get_mut(id)?;
        for todo in &mut list.todos {
            todo.completed = true;
        }
        tracing::debug!(id, count = list.todos.len(), "completed all todos");
        Ok(())
    }
}
