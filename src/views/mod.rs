//! Server-rendered HTML pages.
//!
//! Each page function returns a complete document wrapped in [`layout`]. All
//! user-supplied text goes through [`escape`].

use std::fmt::Write;

use todos_core::{ordering, TodoList, TodoLists};

use crate::session::Flash;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS class for a list on the index page.
pub fn list_class(list: &TodoList) -> Option<&'static str> {
    list.is_complete().then_some("complete")
}

fn class_attr(class: Option<&str>) -> String {
    class
        .map(|class| format!(r#" class="{class}""#))
        .unwrap_or_default()
}

pub fn layout(title: &str, flash: &Flash, body: &str) -> String {
    let mut messages = String::new();
    if let Some(error) = &flash.error {
        let _ = write!(
            messages,
            r#"<div class="flash error"><p>{}</p></div>"#,
            escape(error)
        );
    }
    if let Some(success) = &flash.success {
        let _ = write!(
            messages,
            r#"<div class="flash success"><p>{}</p></div>"#,
            escape(success)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Todo Tracker</title>
</head>
<body>
<header><h1>Todo Tracker</h1></header>
<main>
{messages}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn lists_page(lists: &TodoLists, flash: &Flash) -> String {
    let mut items = String::new();
    for (list, id) in lists.sorted() {
        let _ = write!(
            items,
            r#"<li{class}><a href="/lists/{id}"><h2>{name}</h2><p>{remaining} / {total}</p></a></li>"#,
            class = class_attr(list_class(list)),
            name = escape(&list.name),
            remaining = list.remaining_count(),
            total = list.todos_count(),
        );
    }

    let body = format!(
        r#"<section id="lists">
<ul>{items}</ul>
</section>
<a class="add" href="/lists/new">New List</a>"#
    );
    layout("Lists", flash, &body)
}

pub fn new_list_page(list_name: &str, flash: &Flash) -> String {
    let body = format!(
        r#"<form action="/lists" method="post">
<dl>
<dt><label for="list_name">Enter the name for your new list:</label></dt>
<dd><input name="list_name" id="list_name" placeholder="List Name" type="text" value="{value}"></dd>
</dl>
<fieldset class="actions">
<input type="submit" value="Save">
<a href="/lists">Cancel</a>
</fieldset>
</form>"#,
        value = escape(list_name),
    );
    layout("New List", flash, &body)
}

/// A single list with its todos in display order. `todo_text` refills the
/// add-todo field after a rejected submission.
pub fn list_page(list: &TodoList, id: usize, todo_text: &str, flash: &Flash) -> String {
    let mut todos = String::new();
    for (todo, index) in ordering::sort_todos(&list.todos) {
        let _ = write!(
            todos,
            r#"<li{class}>
<form action="/lists/{id}/todos/{index}" method="post" class="check">
<input type="hidden" name="completed" value="{toggle}">
<button type="submit">Complete</button>
</form>
<h3>{name}</h3>
<form action="/lists/{id}/todos/{index}/destroy" method="post" class="delete">
<button type="submit">Delete</button>
</form>
</li>"#,
            class = class_attr(todo.completed.then_some("complete")),
            toggle = !todo.completed,
            name = escape(&todo.name),
        );
    }

    let body = format!(
        r#"<section id="todos"{class}>
<header>
<h2>{name}</h2>
<ul>
<li>
<form action="/lists/{id}/complete_all" method="post">
<button class="check" type="submit">Complete All</button>
</form>
</li>
<li><a class="edit" href="/lists/{id}/edit">Edit List</a></li>
</ul>
</header>
<ul>{todos}</ul>
</section>
<form action="/lists/{id}/todos" method="post">
<dl>
<dt><label for="todo">Enter a new todo item:</label></dt>
<dd><input name="todo" id="todo" placeholder="Something to do" type="text" value="{value}"></dd>
</dl>
<fieldset class="actions">
<input type="submit" value="Add">
</fieldset>
</form>
<a class="list" href="/lists">All Lists</a>"#,
        class = class_attr(list_class(list)),
        name = escape(&list.name),
        value = escape(todo_text),
    );
    layout(&list.name, flash, &body)
}

/// Rename form for a list. `list_name` is the value shown in the field: the
/// current name, or the rejected submission on re-render.
pub fn edit_list_page(list: &TodoList, id: usize, list_name: &str, flash: &Flash) -> String {
    let body = format!(
        r#"<section>
<h2>Editing '{current}'</h2>
<form action="/lists/{id}/destroy" method="post">
<button class="delete" type="submit">Delete List</button>
</form>
</section>
<form action="/lists/{id}" method="post">
<dl>
<dt><label for="list_name">Enter the new name for the list:</label></dt>
<dd><input name="list_name" id="list_name" placeholder="List Name" type="text" value="{value}"></dd>
</dl>
<fieldset class="actions">
<input type="submit" value="Save">
<a href="/lists/{id}">Cancel</a>
</fieldset>
</form>"#,
        current = escape(&list.name),
        value = escape(list_name),
    );
    layout("Edit List", flash, &body)
}

/// A page showing a single message, for requests that cannot be served.
pub fn error_page(title: &str, message: &str, flash: &Flash) -> String {
    let body = format!(
        r#"<section class="error-page">
<p>{}</p>
<a href="/lists">All Lists</a>
</section>"#,
        escape(message)
    );
    layout(title, flash, &body)
}

pub fn not_found_page(message: &str, flash: &Flash) -> String {
    error_page("Not Found", message, flash)
}
