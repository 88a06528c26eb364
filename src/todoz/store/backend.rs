use crate::error::{Result, TodoError};

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`TodoStore`](super::TodoStore) handles the "what". All methods take
/// `&self`; backends that keep state use interior mutability.
pub trait StorageBackend {
    /// Read the value stored at `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored at `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value at `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Human readable location of `key`.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> String;
}

/// Checks that a key is safe to use as a file name.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(TodoError::Store("Storage key cannot be empty".to_string()));
    }
    if key.starts_with('.') {
        return Err(TodoError::Store(format!(
            "Storage key cannot start with '.': {}",
            key
        )));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(TodoError::Store(format!(
            "Invalid character '{}' in storage key: {}",
            bad, key
        )));
    }
    Ok(())
}
