//! # Commands
//!
//! Business logic for each user action, one module per command. Commands take
//! a [`TodoStore`](crate::store::TodoStore) and plain Rust arguments and
//! return a [`CmdResult`]: the todos touched or listed plus messages for the
//! user. They never print.
//!
//! A selector that matches nothing, or text that would not change anything,
//! produces a message and leaves the list alone. Only backend failures come
//! back as `Err`.

use crate::config::TodozConfig;
use crate::index::DisplayTodo;
use crate::model::Todo;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod path;
pub mod toggle;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<DisplayTodo>,
    pub remaining: Option<usize>,
    pub location: Option<String>,
    pub config: Option<TodozConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_remaining(mut self, remaining: usize) -> Self {
        self.remaining = Some(remaining);
        self
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }
}
