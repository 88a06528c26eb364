use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(store: &mut TodoStore<B>, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.add(text)? {
        Some(todo) => {
            result.add_message(CmdMessage::success(format!("Todo added: {}", todo.text)));
            result.affected_todos.push(todo);
        }
        None => result.add_message(CmdMessage::info("Nothing to add: text is empty")),
    }

    Ok(result.with_remaining(store.remaining_count()))
}
