//! Domain models.
//!
//! - [`TodoList`]: a named, ordered collection of todos.
//! - [`Todo`]: a named item with a completion flag, owned by exactly one list.
//!
//! Both are owned by the browser session; nothing else holds references to them.

mod list;
mod todo;

pub use list::*;
pub use todo::*;
