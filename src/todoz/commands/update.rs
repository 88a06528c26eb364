use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TodoSelector;
use crate::store::{StorageBackend, TodoStore};

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    store: &mut TodoStore<B>,
    selector: &TodoSelector,
    text: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let resolved = resolve_selectors(store, std::slice::from_ref(selector), &mut result);

    if let Some((selector, id)) = resolved.into_iter().next() {
        if store.update(&id, text)? {
            if let Some(todo) = store.get(&id) {
                result.add_message(CmdMessage::success(format!(
                    "Todo updated ({}): {}",
                    selector, todo.text
                )));
                result.affected_todos.push(todo.clone());
            }
        } else {
            result.add_message(CmdMessage::info(format!(
                "Todo {} unchanged: text is empty or the same",
                selector
            )));
        }
    }

    Ok(result.with_remaining(store.remaining_count()))
}
