use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TodoSelector;
use crate::store::{StorageBackend, TodoStore};

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    store: &mut TodoStore<B>,
    selectors: &[TodoSelector],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let resolved = resolve_selectors(store, selectors, &mut result);

    for (selector, id) in resolved {
        if !store.toggle(&id)? {
            continue;
        }
        if let Some(todo) = store.get(&id) {
            let state = if todo.completed { "completed" } else { "active" };
            result.add_message(CmdMessage::success(format!(
                "Todo {} ({}): {}",
                state, selector, todo.text
            )));
            result.affected_todos.push(todo.clone());
        }
    }

    Ok(result.with_remaining(store.remaining_count()))
}
