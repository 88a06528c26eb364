//! # Storage Layer
//!
//! The todo list lives in memory inside a [`TodoStore`] and is mirrored, in
//! full, into a key-value store after every mutation.
//!
//! ## Pieces
//!
//! - [`backend::StorageBackend`]: the raw key-value I/O ("how" things are stored).
//!   - [`fs_backend::FsBackend`]: one JSON file per key, atomic writes.
//!   - [`mem_backend::MemBackend`]: a `HashMap`, for tests.
//! - [`persistence`]: reads and writes a whole [`TodoList`](crate::model::TodoList)
//!   at a single key. Reading never fails: anything missing or malformed
//!   becomes an empty list.
//! - [`todo_store::TodoStore`]: the list operations (add, toggle, update,
//!   delete, clear completed) and the filtered view.
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! ~/.local/share/todoz/
//! ├── todos.json      # the list, a JSON array of {id, text, completed}
//! └── config.json     # TodozConfig
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod persistence;
pub mod todo_store;

pub use backend::StorageBackend;
pub use todo_store::TodoStore;
