//! Core model for the session-backed to-do manager.
//!
//! Everything here is pure data manipulation: the HTTP layer owns sessions,
//! routing and rendering, and calls into [`TodoLists`] for every mutation.
//!
//! # Identity
//!
//! Lists and todos are addressed by their position in the owning collection.
//! Removing an element shifts every later sibling down by one, so callers must
//! not hold on to an index across a mutation.

mod error;
mod index;
mod lists;
pub mod models;
pub mod ordering;
pub mod validation;

pub use error::{NameError, Target, TodoError};
pub use index::parse_index;
pub use lists::TodoLists;
pub use models::{Todo, TodoList};

/// Maximum length, in characters, of list names and todo text.
pub const MAX_NAME_LEN: usize = 100;
