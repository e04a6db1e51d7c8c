//! Todo record domain model.
//!
//! # Responsibility
//! - Define the canonical task record with text, completion flag, and order.
//! - Provide lifecycle helpers for completion toggling.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `order` is non-negative; values are allocated by the collection.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Validation failures for todo records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Record id is the nil UUID.
    NilId,
    /// Ordering number is below zero.
    NegativeOrder(i64),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be the nil uuid"),
            Self::NegativeOrder(order) => {
                write!(f, "todo order must not be negative, got {order}")
            }
        }
    }
}

impl Error for TodoValidationError {}

/// One task record: display text, completion flag, ordering number.
///
/// The wire shape matches the remote collection resource:
/// `{"id": "...", "text": "...", "done": false, "order": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable global id used for collection membership and sync addressing.
    pub id: TodoId,
    /// Display text shown in the list element.
    pub text: String,
    /// Completion flag toggled by the check control.
    pub done: bool,
    /// Ordering number; assigned as `max existing order + 1` at creation.
    pub order: i64,
}

impl Todo {
    /// Creates a new record with a generated stable id and `done = false`.
    pub fn new(text: impl Into<String>, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            order,
        }
    }

    /// Creates a record with a caller-provided stable id.
    ///
    /// Used by sync paths where identity already exists externally.
    pub fn with_id(
        id: TodoId,
        text: impl Into<String>,
        order: i64,
    ) -> Result<Self, TodoValidationError> {
        let todo = Self {
            id,
            text: text.into(),
            done: false,
            order,
        };
        todo.validate()?;
        Ok(todo)
    }

    /// Flips the completion flag and touches nothing else.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.order < 0 {
            return Err(TodoValidationError::NegativeOrder(self.order));
        }
        Ok(())
    }
}
