//! In-process store adapter.
//!
//! # Responsibility
//! - Provide collection-resource semantics without a network backend.
//! - Serve tests and offline runs with the same contract as the HTTP adapter.
//!
//! # Invariants
//! - `fetch_all` returns records sorted by `order` ascending.
//! - `create` rejects an id that is already a member.

use super::{StoreError, StoreResult, TodoStore};
use crate::model::todo::{Todo, TodoId};
use std::collections::BTreeMap;

/// In-memory collection resource keyed by record id.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    records: BTreeMap<TodoId, Todo>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns one stored record by id.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.records.get(&id)
    }
}

impl TodoStore for MemoryTodoStore {
    fn fetch_all(&self) -> StoreResult<Vec<Todo>> {
        let mut records: Vec<Todo> = self.records.values().cloned().collect();
        records.sort_by_key(|todo| todo.order);
        Ok(records)
    }

    fn create(&mut self, todo: &Todo) -> StoreResult<Todo> {
        todo.validate()?;
        if self.records.contains_key(&todo.id) {
            return Err(StoreError::InvalidData(format!(
                "todo already stored: {}",
                todo.id
            )));
        }
        self.records.insert(todo.id, todo.clone());
        Ok(todo.clone())
    }

    fn update(&mut self, todo: &Todo) -> StoreResult<Todo> {
        todo.validate()?;
        if !self.records.contains_key(&todo.id) {
            return Err(StoreError::NotFound(todo.id));
        }
        self.records.insert(todo.id, todo.clone());
        Ok(todo.clone())
    }

    fn destroy(&mut self, id: TodoId) -> StoreResult<()> {
        match self.records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}
