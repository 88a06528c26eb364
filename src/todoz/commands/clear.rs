use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(store: &mut TodoStore<B>) -> Result<CmdResult> {
    let completed: Vec<_> = store
        .items()
        .iter()
        .filter(|t| t.completed)
        .cloned()
        .collect();
    let removed = store.clear_completed()?;

    let mut result = CmdResult::default();
    let message = match removed {
        0 => CmdMessage::info("No completed todos to clear"),
        1 => CmdMessage::success("Cleared 1 completed todo"),
        n => CmdMessage::success(format!("Cleared {} completed todos", n)),
    };
    result.add_message(message);
    result.affected_todos = completed;

    Ok(result.with_remaining(store.remaining_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::todo_store::fixtures::StoreFixture;

    #[test]
    fn clears_completed() {
        let mut store = StoreFixture::new()
            .with_completed("a")
            .with_active("b")
            .with_completed("c")
            .store;
        let result = run(&mut store).unwrap();

        assert_eq!(result.affected_todos.len(), 2);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].text, "b");
        assert!(result.messages[0].content.contains("2"));
    }

    #[test]
    fn nothing_to_clear() {
        let mut store = StoreFixture::new().with_todos(2).store;
        let result = run(&mut store).unwrap();

        assert!(result.affected_todos.is_empty());
        assert_eq!(store.items().len(), 2);
        assert_eq!(result.remaining, Some(2));
    }
}
