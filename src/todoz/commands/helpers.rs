use crate::commands::{CmdMessage, CmdResult};
use crate::index::{TodoSelector, resolve};
use crate::store::{StorageBackend, TodoStore};

/// Maps selectors to ids, warning about the ones that match nothing.
///
/// Selectors naming the same todo twice resolve once, so `done 1 1` does not
/// flip the todo back.
pub fn resolve_selectors<B: StorageBackend>(
    store: &TodoStore<B>,
    selectors: &[TodoSelector],
    result: &mut CmdResult,
) -> Vec<(TodoSelector, String)> {
    let mut resolved: Vec<(TodoSelector, String)> = Vec::with_capacity(selectors.len());

    for selector in selectors {
        match resolve(store.items(), selector) {
            Some(todo) => {
                if !resolved.iter().any(|(_, id)| id == &todo.id) {
                    resolved.push((selector.clone(), todo.id.clone()));
                }
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No todo matches {}",
                selector
            ))),
        }
    }

    resolved
}
