use axum::{
    extract::{rejection::FormRejection, Form, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use todos_core::{parse_index, Target, TodoError};

use crate::session::{Flash, SessionContext, SessionData};
use crate::views;

// ============================================================
// Error Handling
// ============================================================

/// A rendered page returned instead of the normal response: a 404 for an
/// unknown list or todo, or a re-rendered form after a validation error.
type PageError = (StatusCode, Html<String>);

fn not_found(error: TodoError, flash: &Flash) -> PageError {
    tracing::warn!("Not found: {}", error);
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found_page(&error.to_string(), flash)),
    )
}

/// Store a validation error as the error flash and hand back the flash to
/// render with the form.
fn reject(data: &mut SessionData, error: TodoError) -> Flash {
    tracing::warn!("Validation error: {}", error);
    data.flash_error(error.to_string());
    data.take_flash()
}

fn list_index(raw: &str) -> Result<usize, TodoError> {
    parse_index(raw).ok_or(TodoError::IndexOutOfRange(Target::List))
}

fn todo_index(raw: &str) -> Result<usize, TodoError> {
    parse_index(raw).ok_or(TodoError::IndexOutOfRange(Target::Todo))
}

/// Strip leading and trailing ASCII whitespace and NUL. Other Unicode
/// whitespace is part of the name.
fn strip(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B' || c == '\0')
}

/// Unwrap a submitted form. A request without a form content type (for
/// example an empty POST) reads as a form with every field missing.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> Result<T, PageError> {
    match form {
        Ok(Form(form)) => Ok(form),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!("Rejected form: {}", message);
            Err((
                rejection.status(),
                Html(views::error_page("Bad Request", &message, &Flash::default())),
            ))
        }
    }
}

fn redirect_to_list(id: usize) -> Redirect {
    Redirect::to(&format!("/lists/{id}"))
}

// ============================================================
// Forms
// ============================================================

/// Missing fields read as empty so they fail validation instead of being
/// rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ListNameForm {
    #[serde(default)]
    pub list_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub todo: String,
}

/// Only the exact string `"true"` marks a todo completed.
#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub completed: String,
}

impl ToggleForm {
    pub fn is_completed(&self) -> bool {
        self.completed == "true"
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Lists
// ============================================================

pub async fn root() -> Redirect {
    Redirect::to("/lists")
}

pub async fn list_lists(session: SessionContext) -> Html<String> {
    session.with(|data| {
        let flash = data.take_flash();
        Html(views::lists_page(&data.lists, &flash))
    })
}

pub async fn new_list(session: SessionContext) -> Html<String> {
    session.with(|data| Html(views::new_list_page("", &data.take_flash())))
}

pub async fn create_list(
    session: SessionContext,
    form: Result<Form<ListNameForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let form = form_or_default(form)?;
    session.with(|data| create_list_in(data, strip(&form.list_name)))
}

fn create_list_in(data: &mut SessionData, list_name: &str) -> Result<Redirect, PageError> {
    if let Err(e) = data.lists.create_list(list_name) {
        let flash = reject(data, e);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::new_list_page(list_name, &flash)),
        ));
    }

    data.flash_success("The list has been created.");
    Ok(Redirect::to("/lists"))
}

pub async fn show_list(
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    session.with(|data| list_page_in(data, &id))
}

fn list_page_in(data: &mut SessionData, raw_id: &str) -> Result<Html<String>, PageError> {
    let flash = data.take_flash();
    let id = list_index(raw_id).map_err(|e| not_found(e, &flash))?;
    let list = data.lists.get(id).map_err(|e| not_found(e, &flash))?;
    Ok(Html(views::list_page(list, id, "", &flash)))
}

pub async fn edit_list(
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    session.with(|data| edit_page_in(data, &id))
}

fn edit_page_in(data: &mut SessionData, raw_id: &str) -> Result<Html<String>, PageError> {
    let flash = data.take_flash();
    let id = list_index(raw_id).map_err(|e| not_found(e, &flash))?;
    let list = data.lists.get(id).map_err(|e| not_found(e, &flash))?;
    Ok(Html(views::edit_list_page(list, id, &list.name, &flash)))
}

pub async fn update_list(
    session: SessionContext,
    Path(id): Path<String>,
    form: Result<Form<ListNameForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let form = form_or_default(form)?;
    session.with(|data| rename_list_in(data, &id, strip(&form.list_name)))
}

fn rename_list_in(
    data: &mut SessionData,
    raw_id: &str,
    list_name: &str,
) -> Result<Redirect, PageError> {
    let result = list_index(raw_id).and_then(|id| {
        data.lists.rename_list(id, list_name)?;
        Ok(id)
    });

    match result {
        Ok(id) => {
            data.flash_success("The list has been updated.");
            Ok(redirect_to_list(id))
        }
        Err(e) if e.is_validation() => {
            let flash = reject(data, e);
            let id = list_index(raw_id).map_err(|e| not_found(e, &flash))?;
            let list = data.lists.get(id).map_err(|e| not_found(e, &flash))?;
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::edit_list_page(list, id, list_name, &flash)),
            ))
        }
        Err(e) => Err(not_found(e, &Flash::default())),
    }
}

pub async fn delete_list(
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    session.with(|data| delete_list_in(data, &id))
}

fn delete_list_in(data: &mut SessionData, raw_id: &str) -> Result<Redirect, PageError> {
    list_index(raw_id)
        .and_then(|id| data.lists.delete_list(id))
        .map_err(|e| not_found(e, &Flash::default()))?;

    data.flash_success("The list has been deleted.");
    Ok(Redirect::to("/lists"))
}

// ============================================================
// Todos
// ============================================================

pub async fn create_todo(
    session: SessionContext,
    Path(id): Path<String>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let form = form_or_default(form)?;
    session.with(|data| add_todo_in(data, &id, strip(&form.todo)))
}

fn add_todo_in(data: &mut SessionData, raw_id: &str, todo: &str) -> Result<Redirect, PageError> {
    let result = list_index(raw_id).and_then(|id| {
        data.lists.add_todo(id, todo)?;
        Ok(id)
    });

    match result {
        Ok(id) => {
            data.flash_success("The todo has been added.");
            Ok(redirect_to_list(id))
        }
        Err(e) if e.is_validation() => {
            let flash = reject(data, e);
            let id = list_index(raw_id).map_err(|e| not_found(e, &flash))?;
            let list = data.lists.get(id).map_err(|e| not_found(e, &flash))?;
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::list_page(list, id, todo, &flash)),
            ))
        }
        Err(e) => Err(not_found(e, &Flash::default())),
    }
}

pub async fn delete_todo(
    session: SessionContext,
    Path((id, index)): Path<(String, String)>,
) -> Result<Redirect, PageError> {
    session.with(|data| delete_todo_in(data, &id, &index))
}

fn delete_todo_in(
    data: &mut SessionData,
    raw_id: &str,
    raw_index: &str,
) -> Result<Redirect, PageError> {
    let id = list_index(raw_id).map_err(|e| not_found(e, &Flash::default()))?;
    todo_index(raw_index)
        .and_then(|index| data.lists.delete_todo(id, index))
        .map_err(|e| not_found(e, &Flash::default()))?;

    data.flash_success("To do has been deleted.");
    Ok(redirect_to_list(id))
}

pub async fn update_todo(
    session: SessionContext,
    Path((id, index)): Path<(String, String)>,
    form: Result<Form<ToggleForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let form = form_or_default(form)?;
    session.with(|data| toggle_todo_in(data, &id, &index, form.is_completed()))
}

fn toggle_todo_in(
    data: &mut SessionData,
    raw_id: &str,
    raw_index: &str,
    completed: bool,
) -> Result<Redirect, PageError> {
    let id = list_index(raw_id).map_err(|e| not_found(e, &Flash::default()))?;
    todo_index(raw_index)
        .and_then(|index| data.lists.set_completed(id, index, completed))
        .map_err(|e| not_found(e, &Flash::default()))?;

    data.flash_success("To do has been updated.");
    Ok(redirect_to_list(id))
}

pub async fn complete_all(
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    session.with(|data| complete_all_in(data, &id))
}

fn complete_all_in(data: &mut SessionData, raw_id: &str) -> Result<Redirect, PageError> {
    list_index(raw_id)
        .and_then(|id| {
            data.lists.complete_all(id)?;
            Ok(id)
        })
        .map(|id| {
            data.flash_success("All to dos have been marked as complete.");
            redirect_to_list(id)
        })
        .map_err(|e| not_found(e, &Flash::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_form_only_accepts_exact_true() {
        let form = |value: &str| ToggleForm {
            completed: value.to_string(),
        };
        assert!(form("true").is_completed());
        assert!(!form("TRUE").is_completed());
        assert!(!form("false").is_completed());
        assert!(!form("").is_completed());
    }

    #[test]
    fn strip_removes_only_ascii_whitespace_and_nul() {
        assert_eq!(strip(" \t Work\r\n"), "Work");
        assert_eq!(strip("\0Work\x0B"), "Work");
        assert_eq!(strip("\u{a0}"), "\u{a0}");
        assert_eq!(strip(" \u{3000}Home "), "\u{3000}Home");
    }

    #[test]
    fn bad_path_segments_map_to_the_right_target() {
        assert_eq!(
            list_index("-1"),
            Err(TodoError::IndexOutOfRange(Target::List))
        );
        assert_eq!(
            todo_index("-4"),
            Err(TodoError::IndexOutOfRange(Target::Todo))
        );
        assert_eq!(list_index("abc"), Ok(0));
    }
}
