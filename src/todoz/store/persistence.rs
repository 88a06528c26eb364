//! Reading and writing the whole todo list at a single key.
//!
//! [`load`] is total: a missing key, an unreadable backend, invalid JSON, or
//! a value of the wrong shape all come back as an empty list. The problem is
//! logged and the caller carries on with a clean slate.

use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoList};
use std::collections::HashSet;

pub const DEFAULT_KEY: &str = "todos";

pub fn load<B: StorageBackend>(backend: &B, key: &str) -> TodoList {
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored todos, starting empty");
            return TodoList::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read stored todos, starting empty");
            return TodoList::new();
        }
    };

    match decode(&raw) {
        Ok(list) => {
            tracing::debug!(key, count = list.len(), "loaded todos");
            list
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored todos are malformed, starting empty");
            TodoList::new()
        }
    }
}

pub fn save<B: StorageBackend>(backend: &B, key: &str, list: &[Todo]) -> Result<()> {
    let content = serde_json::to_string_pretty(list).map_err(TodoError::Serialization)?;
    backend.write(key, &content)?;
    tracing::debug!(key, count = list.len(), "saved todos");
    Ok(())
}

/// Parses a stored list. Later entries reusing an earlier id are dropped.
fn decode(raw: &str) -> Result<TodoList> {
    let parsed: Vec<Todo> = serde_json::from_str(raw).map_err(TodoError::Serialization)?;

    let mut seen = HashSet::new();
    let mut list = TodoList::with_capacity(parsed.len());
    for todo in parsed {
        if seen.insert(todo.id.clone()) {
            list.push(todo);
        } else {
            tracing::warn!(id = %todo.id, "dropping todo with duplicate id");
        }
    }
    Ok(list)
}
