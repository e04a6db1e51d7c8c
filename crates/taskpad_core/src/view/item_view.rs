//! Per-record list item presenter.
//!
//! # Responsibility
//! - Bind one todo record to one rendered list element.
//! - Track editing state and the edit input buffer.
//!
//! # Invariants
//! - `el` always reflects the last successful render of the bound record.
//! - The edit buffer is primed from the record text when editing starts.

use crate::model::todo::{Todo, TodoId};
use crate::render::jinja::TEMPLATE_ITEM;
use crate::render::{RenderResult, TemplateRenderer};
use serde_json::json;

/// Presenter for one rendered `<li>` element.
#[derive(Debug)]
pub struct TodoItemView {
    id: TodoId,
    el: String,
    editing: bool,
    input: String,
}

impl TodoItemView {
    /// Binds a record and renders its initial element.
    pub fn new(todo: &Todo, renderer: &dyn TemplateRenderer) -> RenderResult<Self> {
        let mut view = Self {
            id: todo.id,
            el: String::new(),
            editing: false,
            input: todo.text.clone(),
        };
        view.render(todo, renderer)?;
        Ok(view)
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Rendered element markup.
    pub fn el(&self) -> &str {
        &self.el
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Current edit input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Enters editing state with the buffer primed from the record text.
    pub fn start_edit(&mut self, todo: &Todo, renderer: &dyn TemplateRenderer) -> RenderResult<()> {
        self.editing = true;
        self.input = todo.text.clone();
        self.render(todo, renderer)
    }

    /// Updates the edit buffer without re-rendering; keystrokes land in the
    /// input element itself.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Leaves editing state and re-renders from the (already saved) record.
    pub fn finish_edit(
        &mut self,
        todo: &Todo,
        renderer: &dyn TemplateRenderer,
    ) -> RenderResult<()> {
        self.editing = false;
        self.render(todo, renderer)
    }

    /// Re-renders the element from the bound record.
    pub fn render(&mut self, todo: &Todo, renderer: &dyn TemplateRenderer) -> RenderResult<()> {
        let data = json!({
            "id": todo.id,
            "text": todo.text,
            "done": todo.done,
            "order": todo.order,
            "editing": self.editing,
            "input": self.input,
        });
        self.el = renderer.render(TEMPLATE_ITEM, &data)?;
        Ok(())
    }
}
