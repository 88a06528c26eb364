use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_todos;
use crate::model::Filter;
use crate::store::{StorageBackend, TodoStore};

/// Applies `filter` to the store and lists what it shows.
pub fn run<B: StorageBackend>(store: &mut TodoStore<B>, filter: Filter) -> Result<CmdResult> {
    store.set_filter(filter);
    let listed = index_todos(store.items(), store.filter());

    Ok(CmdResult::default()
        .with_listed_todos(listed)
        .with_remaining(store.remaining_count()))
}
