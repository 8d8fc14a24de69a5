//! Session-backed to-do list manager.
//!
//! Users create named lists, add todos to them and tick them off. All state
//! lives in the browser's session; see [`session`] for the store and
//! [`api`] for the HTTP routes. List and todo rules live in `todos_core`.

pub mod api;
pub mod config;
pub mod session;
pub mod views;
