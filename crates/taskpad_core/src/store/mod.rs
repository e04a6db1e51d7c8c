//! Synchronization collaborator contracts.
//!
//! # Responsibility
//! - Define the persist/fetch/destroy contract against a collection resource.
//! - Keep transport details inside adapter implementations.
//!
//! # Invariants
//! - Write paths must call `Todo::validate()` before persistence.
//! - Adapters return semantic errors (`NotFound`) in addition to transport
//!   errors.

pub mod http;
pub mod memory;

use crate::model::todo::{Todo, TodoId, TodoValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic store error for todo persistence and fetch operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TodoValidationError),
    NotFound(TodoId),
    Http(reqwest::Error),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::Http(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// Collection-resource interface for todo persistence.
///
/// `create` and `update` return the stored record as echoed by the backend,
/// so callers can adopt any backend-side normalization.
pub trait TodoStore {
    fn fetch_all(&self) -> StoreResult<Vec<Todo>>;
    fn create(&mut self, todo: &Todo) -> StoreResult<Todo>;
    fn update(&mut self, todo: &Todo) -> StoreResult<Todo>;
    fn destroy(&mut self, id: TodoId) -> StoreResult<()>;
}
