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
    // resolve everything up front; deleting shifts the indexes of later todos
    let resolved = resolve_selectors(store, selectors, &mut result);

    for (selector, id) in resolved {
        if let Some(todo) = store.delete(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Todo deleted ({}): {}",
                selector, todo.text
            )));
            result.affected_todos.push(todo);
        }
    }

    Ok(result.with_remaining(store.remaining_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::todo_store::fixtures::StoreFixture;

    #[test]
    fn deletes_by_indexes_shown_before_deleting() {
        let mut store = StoreFixture::new().with_todos(3).store;
        // list is [Todo 3, Todo 2, Todo 1]
        let result = run(&mut store, &[TodoSelector::Index(1), TodoSelector::Index(2)]).unwrap();

        assert_eq!(result.affected_todos.len(), 2);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].text, "Todo 1");
    }

    #[test]
    fn unknown_selector_leaves_list() {
        let mut store = StoreFixture::new().with_todos(2).store;
        let before = store.items().to_vec();
        let result = run(&mut store, &[TodoSelector::Id("ffffffff".into())]).unwrap();

        assert!(result.affected_todos.is_empty());
        assert_eq!(store.items(), before.as_slice());
    }
}
