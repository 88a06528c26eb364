//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all todoz operations, regardless of the UI being used.
//!
//! It parses raw user references into [`TodoSelector`]s, joins free text,
//! and dispatches to `commands/*.rs`. It does no business logic and no I/O
//! of its own.
//!
//! `TodoApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `TodoApi<FsBackend>`
//! - Testing: `TodoApi<MemBackend>`

use crate::commands;
use crate::error::{Result, TodoError};
use crate::index::TodoSelector;
use crate::model::Filter;
use crate::store::{StorageBackend, TodoStore};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for todoz operations.
pub struct TodoApi<B: StorageBackend> {
    store: TodoStore<B>,
    config_dir: PathBuf,
    default_filter: Filter,
}

impl<B: StorageBackend> TodoApi<B> {
    pub fn new(store: TodoStore<B>, config_dir: PathBuf) -> Self {
        Self {
            store,
            config_dir,
            default_filter: Filter::default(),
        }
    }

    pub fn with_default_filter(mut self, filter: Filter) -> Self {
        self.default_filter = filter;
        self
    }

    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    pub fn add_todo<I: AsRef<str>>(&mut self, words: &[I]) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &join_words(words))
    }

    pub fn toggle_todos<I: AsRef<str>>(&mut self, refs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(refs)?;
        commands::toggle::run(&mut self.store, &selectors)
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, refs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(refs)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn update_todo<I: AsRef<str>>(
        &mut self,
        reference: &str,
        words: &[I],
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(reference)?;
        commands::update::run(&mut self.store, &selector, &join_words(words))
    }

    pub fn clear_completed(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Lists todos; `None` uses the configured default filter.
    pub fn list_todos(&mut self, filter: Option<Filter>) -> Result<commands::CmdResult> {
        let filter = filter.unwrap_or(self.default_filter);
        commands::list::run(&mut self.store, filter)
    }

    pub fn storage_path(&self) -> commands::CmdResult {
        commands::path::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn parse_selector(input: &str) -> Result<TodoSelector> {
    TodoSelector::from_str(input).map_err(TodoError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<TodoSelector>> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

fn join_words<I: AsRef<str>>(words: &[I]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
