//! HTTP adapter for the remote collection resource.
//!
//! # Responsibility
//! - Speak JSON create/read/update/delete against a URL-addressed collection.
//! - Map transport failures into store error envelopes.
//!
//! # Invariants
//! - The base URL always carries exactly one trailing slash.
//! - 404 responses on item paths surface as `StoreError::NotFound`.

use super::{StoreError, StoreResult, TodoStore};
use crate::model::todo::{Todo, TodoId};
use log::{error, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Blocking JSON client over a remote todo collection.
pub struct HttpTodoStore {
    client: Client,
    base_url: String,
}

impl HttpTodoStore {
    /// Creates a store over the given collection base URL, e.g.
    /// `http://localhost:5000/todos/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: TodoId) -> String {
        format!("{}{}", self.base_url, id)
    }
}

impl TodoStore for HttpTodoStore {
    fn fetch_all(&self) -> StoreResult<Vec<Todo>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()?
            .error_for_status()?;
        let records: Vec<Todo> = response.json()?;
        info!(
            "event=store_fetch module=store status=ok count={}",
            records.len()
        );
        Ok(records)
    }

    fn create(&mut self, todo: &Todo) -> StoreResult<Todo> {
        todo.validate()?;
        let response = self
            .client
            .post(&self.base_url)
            .json(todo)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    fn update(&mut self, todo: &Todo) -> StoreResult<Todo> {
        todo.validate()?;
        let response = self.client.put(self.item_url(todo.id)).json(todo).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(todo.id));
        }
        Ok(response.error_for_status()?.json()?)
    }

    fn destroy(&mut self, id: TodoId) -> StoreResult<()> {
        let response = self.client.delete(self.item_url(id)).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            error!("event=store_destroy module=store status=error id={id} error_code=not_found");
            return Err(StoreError::NotFound(id));
        }
        response.error_for_status()?;
        Ok(())
    }
}

fn normalize_base_url(url: String) -> String {
    let mut normalized = url;
    while normalized.ends_with('/') {
        normalized.pop();
    }
    normalized.push('/');
    normalized
}
