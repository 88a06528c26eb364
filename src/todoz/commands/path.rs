use crate::commands::CmdResult;
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(store: &TodoStore<B>) -> CmdResult {
    CmdResult::default().with_location(store.backend().location(store.key()))
}
