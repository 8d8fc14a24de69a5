//! Input validation for list names and todo text.
//!
//! Lengths are counted in characters, not bytes. Callers trim surrounding
//! whitespace before validating.

use crate::error::{NameError, TodoError};
use crate::models::TodoList;
use crate::MAX_NAME_LEN;

fn has_valid_length(text: &str) -> bool {
    (1..=MAX_NAME_LEN).contains(&text.chars().count())
}

/// Check a list name against the length bounds and the names already in use.
///
/// `renaming` is the index of the list being renamed, if any; its own current
/// name does not count as a duplicate. Names compare exactly (case-sensitive).
pub fn validate_list_name(
    name: &str,
    lists: &[TodoList],
    renaming: Option<usize>,
) -> Result<(), TodoError> {
    if !has_valid_length(name) {
        return Err(NameError::Length.into());
    }

    let taken = lists
        .iter()
        .enumerate()
        .any(|(index, list)| Some(index) != renaming && list.name == name);
    if taken {
        return Err(NameError::Duplicate.into());
    }

    Ok(())
}

/// Check the text of a new todo.
pub fn validate_todo(text: &str) -> Result<(), TodoError> {
    if has_valid_length(text) {
        Ok(())
    } else {
        Err(TodoError::InvalidTodo)
    }
}
