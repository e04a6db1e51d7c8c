//! Application presenter owning the todo collection and both collaborators.
//!
//! # Responsibility
//! - Own the record collection, the store, and the template renderer.
//! - Map discrete UI events onto single model/collection mutations.
//! - Keep the aggregate stats element and the composed page current.
//!
//! # Invariants
//! - Every collection-affecting event re-renders the stats element.
//! - Item presenters appear in the same order as collection records.
//! - An empty new-todo input never creates a record.

use crate::collection::todo_list::TodoList;
use crate::model::todo::{Todo, TodoId};
use crate::render::jinja::{TEMPLATE_APP, TEMPLATE_STATS};
use crate::render::{RenderError, TemplateRenderer};
use crate::store::{StoreError, TodoStore};
use crate::view::item_view::TodoItemView;
use crate::view::tooltip::TooltipTimer;
use log::info;
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Placeholder text shown in the new-todo input.
pub const NEW_TODO_PLACEHOLDER: &str = "What needs to be done?";

const TODO_LIST_ANCHOR: &str = "<ul id=\"todo-list\"></ul>";
const TODO_STATS_ANCHOR: &str = "<div id=\"todo-stats\"></div>";
const TOOLTIP_HIDDEN: &str = "class=\"ui-tooltip-top\" style=\"display:none;\"";
const TOOLTIP_SHOWN: &str = "class=\"ui-tooltip-top\"";

/// Interactions on one rendered list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEvent {
    /// Check control click: flip the completion flag.
    Toggle,
    /// Double-click on the text: enter editing state.
    StartEdit,
    /// Keystrokes into the edit input.
    EditInput(String),
    /// Blur or enter on the edit input: commit the buffer as the text.
    CommitEdit,
    /// Destroy control click: delete the record.
    Delete,
}

/// Application-level UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keystrokes into the new-todo input.
    NewTodoInput(String),
    /// Enter on the new-todo input.
    NewTodoSubmit,
    /// Clear-completed control click.
    ClearCompleted,
    /// Event targeted at one list item.
    Item(TodoId, ItemEvent),
}

pub type AppResult<T> = Result<T, AppError>;

/// Application presenter errors.
#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Render(RenderError),
    UnknownTodo(TodoId),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::UnknownTodo(id) => write!(f, "no list item bound to todo: {id}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::UnknownTodo(_) => None,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

/// Application presenter bound to one store and one renderer.
pub struct TodoApp<S, R>
where
    S: TodoStore,
    R: TemplateRenderer,
{
    todos: TodoList,
    store: S,
    renderer: R,
    shell_el: String,
    stats_el: String,
    items: Vec<TodoItemView>,
    new_input: String,
    tooltip: TooltipTimer,
}

impl<S, R> TodoApp<S, R>
where
    S: TodoStore,
    R: TemplateRenderer,
{
    /// Constructs the presenter: renders the shell, fetches the remote
    /// collection, and builds one item presenter per record.
    pub fn init(store: S, renderer: R) -> AppResult<Self> {
        let mut app = Self {
            todos: TodoList::new(),
            store,
            renderer,
            shell_el: String::new(),
            stats_el: String::new(),
            items: Vec::new(),
            new_input: String::new(),
            tooltip: TooltipTimer::new(),
        };

        app.shell_el = app
            .renderer
            .render(TEMPLATE_APP, &json!({ "placeholder": NEW_TODO_PLACEHOLDER }))?;

        let records = app.store.fetch_all()?;
        info!(
            "event=collection_fetch module=view status=ok count={}",
            records.len()
        );
        app.todos.reset(records);
        app.add_all()?;
        app.render_stats()?;
        Ok(app)
    }

    /// Dispatches one UI event; `now` anchors the tooltip debounce.
    pub fn dispatch(&mut self, event: AppEvent, now: Instant) -> AppResult<()> {
        match event {
            AppEvent::NewTodoInput(value) => {
                self.new_input = value;
                self.tooltip
                    .on_input(&self.new_input, NEW_TODO_PLACEHOLDER, now);
                Ok(())
            }
            AppEvent::NewTodoSubmit => self.create_on_enter(),
            AppEvent::ClearCompleted => self.clear_completed(),
            AppEvent::Item(id, item_event) => self.dispatch_item(id, item_event),
        }
    }

    /// Advances the tooltip debounce clock; returns whether visibility
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tooltip.tick(now)
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Item presenters in collection order.
    pub fn items(&self) -> &[TodoItemView] {
        &self.items
    }

    /// Current new-todo input buffer.
    pub fn new_input(&self) -> &str {
        &self.new_input
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip.is_visible()
    }

    /// Rendered aggregate stats element.
    pub fn stats_el(&self) -> &str {
        &self.stats_el
    }

    /// Composes shell, list items, and stats into one page.
    pub fn page(&self) -> String {
        let list: String = self
            .items
            .iter()
            .map(TodoItemView::el)
            .collect::<Vec<_>>()
            .join("\n");
        let list_el = format!("<ul id=\"todo-list\">\n{list}\n</ul>");
        let stats_el = format!("<div id=\"todo-stats\">{}</div>", self.stats_el);

        let mut page = self
            .shell_el
            .replace(TODO_LIST_ANCHOR, &list_el)
            .replace(TODO_STATS_ANCHOR, &stats_el);
        if self.tooltip.is_visible() {
            page = page.replace(TOOLTIP_HIDDEN, TOOLTIP_SHOWN);
        }
        page
    }

    fn dispatch_item(&mut self, id: TodoId, event: ItemEvent) -> AppResult<()> {
        match event {
            ItemEvent::Toggle => self.toggle_done(id),
            ItemEvent::StartEdit => self.start_edit(id),
            ItemEvent::EditInput(value) => self.edit_input(id, value),
            ItemEvent::CommitEdit => self.commit_edit(id),
            ItemEvent::Delete => self.delete(id),
        }
    }

    fn create_on_enter(&mut self) -> AppResult<()> {
        if self.new_input.is_empty() {
            return Ok(());
        }

        let todo = Todo::new(self.new_input.clone(), self.todos.next_order());
        let stored = self.store.create(&todo)?;
        info!(
            "event=todo_create module=view status=ok id={} order={}",
            stored.id, stored.order
        );
        self.add_one(stored)?;
        self.new_input.clear();
        self.tooltip.cancel();
        self.render_stats()
    }

    fn toggle_done(&mut self, id: TodoId) -> AppResult<()> {
        let todo = self.todos.get_mut(id).ok_or(AppError::UnknownTodo(id))?;
        todo.toggle();
        let stored = self.store.update(todo)?;
        *todo = stored;
        self.refresh_item(id)?;
        self.render_stats()
    }

    fn start_edit(&mut self, id: TodoId) -> AppResult<()> {
        let todo = self.todos.get(id).ok_or(AppError::UnknownTodo(id))?;
        let item = self
            .items
            .iter_mut()
            .find(|view| view.id() == id)
            .ok_or(AppError::UnknownTodo(id))?;
        item.start_edit(todo, &self.renderer)?;
        Ok(())
    }

    fn edit_input(&mut self, id: TodoId, value: String) -> AppResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|view| view.id() == id)
            .ok_or(AppError::UnknownTodo(id))?;
        item.set_input(value);
        Ok(())
    }

    fn commit_edit(&mut self, id: TodoId) -> AppResult<()> {
        let input = self
            .items
            .iter()
            .find(|view| view.id() == id)
            .ok_or(AppError::UnknownTodo(id))?
            .input()
            .to_string();

        {
            let todo = self.todos.get_mut(id).ok_or(AppError::UnknownTodo(id))?;
            todo.text = input;
            let stored = self.store.update(todo)?;
            *todo = stored;
        }

        let todo = self.todos.get(id).ok_or(AppError::UnknownTodo(id))?;
        let item = self
            .items
            .iter_mut()
            .find(|view| view.id() == id)
            .ok_or(AppError::UnknownTodo(id))?;
        item.finish_edit(todo, &self.renderer)?;
        self.render_stats()
    }

    fn delete(&mut self, id: TodoId) -> AppResult<()> {
        if self.todos.get(id).is_none() {
            return Err(AppError::UnknownTodo(id));
        }
        self.store.destroy(id)?;
        self.todos.remove(id);
        self.items.retain(|view| view.id() != id);
        info!("event=todo_destroy module=view status=ok id={id}");
        self.render_stats()
    }

    fn clear_completed(&mut self) -> AppResult<()> {
        let done_ids: Vec<TodoId> = self.todos.done().iter().map(|todo| todo.id).collect();
        info!(
            "event=clear_completed module=view status=ok count={}",
            done_ids.len()
        );
        for id in done_ids {
            self.delete(id)?;
        }
        self.render_stats()
    }

    fn add_one(&mut self, todo: Todo) -> AppResult<()> {
        let view = TodoItemView::new(&todo, &self.renderer)?;
        self.todos.add(todo);
        let at = self
            .todos
            .position(view.id())
            .ok_or(AppError::UnknownTodo(view.id()))?;
        self.items.insert(at, view);
        Ok(())
    }

    fn add_all(&mut self) -> AppResult<()> {
        let mut views = Vec::with_capacity(self.todos.len());
        for todo in self.todos.iter() {
            views.push(TodoItemView::new(todo, &self.renderer)?);
        }
        self.items = views;
        Ok(())
    }

    fn refresh_item(&mut self, id: TodoId) -> AppResult<()> {
        let todo = self.todos.get(id).ok_or(AppError::UnknownTodo(id))?;
        let item = self
            .items
            .iter_mut()
            .find(|view| view.id() == id)
            .ok_or(AppError::UnknownTodo(id))?;
        item.render(todo, &self.renderer)?;
        Ok(())
    }

    fn render_stats(&mut self) -> AppResult<()> {
        let data = json!({
            "total": self.todos.len(),
            "done": self.todos.done().len(),
            "remaining": self.todos.remaining().len(),
        });
        self.stats_el = self.renderer.render(TEMPLATE_STATS, &data)?;
        Ok(())
    }
}
