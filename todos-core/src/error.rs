use std::fmt;

use thiserror::Error;

/// Errors raised by list and todo operations.
///
/// The `Display` output is the user-facing flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
    #[error("Todo must be between 1 and 100 characters.")]
    InvalidTodo,
    #[error("The specified {0} was not found.")]
    IndexOutOfRange(Target),
}

impl TodoError {
    /// True for errors caused by bad user input, which are shown as a flash
    /// message next to the re-rendered form.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidName(_) | Self::InvalidTodo)
    }
}

/// Why a list name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("List name must be between 1 and 100 characters.")]
    Length,
    #[error("List name must be unique.")]
    Duplicate,
}

/// The kind of element a positional index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    List,
    Todo,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Todo => f.write_str("todo"),
        }
    }
}
