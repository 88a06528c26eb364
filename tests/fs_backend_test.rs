use std::fs;
use tempfile::TempDir;
use todoz::model::Todo;
use todoz::store::StorageBackend;
use todoz::store::TodoStore;
use todoz::store::fs_backend::FsBackend;
use todoz::store::persistence::{self, DEFAULT_KEY};

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_read_write_remove() {
    let (_dir, backend) = setup();

    // 1. Missing
    assert_eq!(backend.read("todos").unwrap(), None);

    // 2. Write creates the root and the file
    backend.write("todos", "[]").unwrap();
    assert_eq!(backend.read("todos").unwrap(), Some("[]".to_string()));
    assert!(backend.root().join("todos.json").exists());

    // 3. Overwrite
    backend.write("todos", "[1]").unwrap();
    assert_eq!(backend.read("todos").unwrap(), Some("[1]".to_string()));

    // 4. Remove, twice
    backend.remove("todos").unwrap();
    backend.remove("todos").unwrap();
    assert_eq!(backend.read("todos").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.write("todos", "Atomic").unwrap();

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_keys() {
    let (dir, backend) = setup();
    assert!(backend.write("../escape", "x").is_err());
    assert!(!dir.path().join("escape.json").exists());
}

#[test]
fn test_fs_backend_location_is_file_path() {
    let (_dir, backend) = setup();
    let location = backend.location("todos");
    assert!(location.ends_with("todos.json"));
}

#[test]
fn test_store_survives_reopen() {
    let (dir, backend) = setup();
    let root = backend.root().to_path_buf();

    let mut store = TodoStore::open(backend);
    let milk = store.add("Buy milk").unwrap().unwrap();
    store.add("Walk dog").unwrap();
    store.toggle(&milk.id).unwrap();
    let expected: Vec<Todo> = store.items().to_vec();
    drop(store);

    let reopened = TodoStore::open(FsBackend::new(root));
    assert_eq!(reopened.items(), expected.as_slice());
    assert_eq!(reopened.remaining_count(), 1);
    drop(dir);
}

#[test]
fn test_corrupted_file_loads_empty() {
    let (_dir, backend) = setup();
    backend.write(DEFAULT_KEY, "{\"not\": \"a list\"").unwrap();

    assert!(persistence::load(&backend, DEFAULT_KEY).is_empty());

    let mut store = TodoStore::open(backend);
    assert!(store.items().is_empty());
    // the next write replaces the bad value
    store.add("Fresh start").unwrap();
    let reloaded = persistence::load(store.backend(), DEFAULT_KEY);
    assert_eq!(reloaded.len(), 1);
}
