use taskpad_core::{MemoryTodoStore, StoreError, Todo, TodoStore};
use uuid::Uuid;

#[test]
fn create_and_fetch_all_returns_records_sorted_by_order() {
    let mut store = MemoryTodoStore::new();
    store.create(&Todo::new("third", 3)).unwrap();
    store.create(&Todo::new("first", 1)).unwrap();
    store.create(&Todo::new("second", 2)).unwrap();

    let records = store.fetch_all().unwrap();
    let orders: Vec<i64> = records.iter().map(|todo| todo.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[test]
fn create_echoes_the_stored_record() {
    let mut store = MemoryTodoStore::new();
    let todo = Todo::new("echo", 1);

    let stored = store.create(&todo).unwrap();
    assert_eq!(stored, todo);
    assert_eq!(store.get(todo.id), Some(&todo));
}

#[test]
fn create_rejects_duplicate_membership() {
    let mut store = MemoryTodoStore::new();
    let todo = Todo::new("once", 1);
    store.create(&todo).unwrap();

    let err = store.create(&todo).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn create_validates_the_record() {
    let mut store = MemoryTodoStore::new();
    let mut todo = Todo::new("invalid", 1);
    todo.order = -2;

    let err = store.create(&todo).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn update_replaces_existing_record() {
    let mut store = MemoryTodoStore::new();
    let mut todo = Todo::new("draft", 1);
    store.create(&todo).unwrap();

    todo.text = "final".to_string();
    todo.done = true;
    let stored = store.update(&todo).unwrap();

    assert_eq!(stored.text, "final");
    assert!(store.get(todo.id).unwrap().done);
}

#[test]
fn update_missing_record_returns_not_found() {
    let mut store = MemoryTodoStore::new();
    let todo = Todo::new("missing", 1);

    let err = store.update(&todo).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == todo.id));
}

#[test]
fn destroy_removes_the_record() {
    let mut store = MemoryTodoStore::new();
    let todo = Todo::new("short lived", 1);
    store.create(&todo).unwrap();

    store.destroy(todo.id).unwrap();
    assert!(store.is_empty());
}

#[test]
fn destroy_missing_record_returns_not_found() {
    let mut store = MemoryTodoStore::new();
    let id = Uuid::new_v4();

    let err = store.destroy(id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
}
