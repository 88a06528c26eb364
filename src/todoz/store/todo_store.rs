use super::backend::StorageBackend;
use super::persistence::{self, DEFAULT_KEY};
use crate::error::Result;
use crate::model::{Filter, Todo, TodoList, normalize_text};

/// The todo list, kept in memory and written through to a backend.
///
/// Every mutation builds the next list, persists it, and only then replaces
/// the in-memory list. A failed write leaves both sides as they were.
///
/// Misuse is never an error: blank text, unchanged text and unknown ids are
/// reported as "nothing happened" (`Ok(false)`, `Ok(None)`). The `Err` arm is
/// reserved for the backend failing to write.
pub struct TodoStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    items: TodoList,
    filter: Filter,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Hydrates from the default key. Malformed or missing state starts empty.
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, DEFAULT_KEY)
    }

    pub fn open_with_key(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = persistence::load(&backend, &key);
        Self {
            backend,
            key,
            items,
            filter: Filter::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Adds a todo at the front of the list and returns it.
    /// Blank text is ignored and nothing is written.
    pub fn add(&mut self, text: &str) -> Result<Option<Todo>> {
        let Some(text) = normalize_text(text) else {
            return Ok(None);
        };

        let todo = Todo::new(text.to_string());
        let mut next = TodoList::with_capacity(self.items.len() + 1);
        next.push(todo.clone());
        next.extend(self.items.iter().cloned());
        self.commit(next)?;
        Ok(Some(todo))
    }

    /// Flips `completed` in place. Returns whether a todo was found.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };

        let mut next = self.items.clone();
        next[pos].completed = !next[pos].completed;
        self.commit(next)?;
        Ok(true)
    }

    /// Removes a todo for good, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Option<Todo>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let mut next = self.items.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Replaces the text of a todo. Blank or unchanged text is ignored.
    pub fn update(&mut self, id: &str, text: &str) -> Result<bool> {
        let Some(text) = normalize_text(text) else {
            return Ok(false);
        };
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };
        if self.items[pos].text == text {
            return Ok(false);
        }

        let mut next = self.items.clone();
        next[pos].text = text.to_string();
        self.commit(next)?;
        Ok(true)
    }

    /// Drops every completed todo and returns how many went.
    ///
    /// Writes even when nothing was completed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let next: TodoList = self
            .items
            .iter()
            .filter(|t| !t.completed)
            .cloned()
            .collect();
        let removed = self.items.len() - next.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Changes which todos [`visible_items`](Self::visible_items) returns.
    /// Nothing is persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible_items(&self) -> Vec<&Todo> {
        self.items.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    fn commit(&mut self, next: TodoList) -> Result<()> {
        persistence::save(&self.backend, &self.key, &next)?;
        self.items = next;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    pub struct StoreFixture {
        pub store: TodoStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: TodoStore::open(MemBackend::new()),
            }
        }

        /// Adds `Todo 1` .. `Todo {count}`; the last one ends up first.
        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("Todo {}", i + 1)).unwrap();
            }
            self
        }

        pub fn with_active(mut self, text: &str) -> Self {
            self.store.add(text).unwrap();
            self
        }

        pub fn with_completed(mut self, text: &str) -> Self {
            let todo = self.store.add(text).unwrap().unwrap();
            self.store.toggle(&todo.id).unwrap();
            self
        }

        pub fn id_of(&self, text: &str) -> String {
            self.store
                .items()
                .iter()
                .find(|t| t.text == text)
                .map(|t| t.id.clone())
                .unwrap()
        }
    }
}
