//! Interactive driver for the taskpad presenter.
//!
//! # Responsibility
//! - Construct the application presenter with a chosen store adapter.
//! - Run a single-threaded line loop mapping commands onto UI events.
//!
//! # Invariants
//! - All work runs on discrete events dispatched sequentially by this loop.

use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead};
use std::time::Instant;
use taskpad_core::{
    core_version, default_log_level, init_logging, AppEvent, HttpTodoStore, ItemEvent,
    JinjaRenderer, MemoryTodoStore, TodoApp, TodoId, TodoStore,
};

/// Synchronized todo-list driver.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Remote collection base URL; omit to run against the in-memory store.
    #[arg(long)]
    base_url: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let exit = match args.base_url {
        Some(url) => run(HttpTodoStore::new(url)),
        None => run(MemoryTodoStore::new()),
    };

    if let Err(err) = exit {
        log::error!("event=app_exit module=cli status=error error={err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run<S: TodoStore>(store: S) -> Result<(), Box<dyn Error>> {
    let renderer = JinjaRenderer::new()?;
    let mut app = TodoApp::init(store, renderer)?;

    println!("taskpad {}", core_version());
    println!("{}", app.page());
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match handle_command(&mut app, input) {
            Ok(true) => println!("{}", app.page()),
            Ok(false) => {}
            Err(err) => println!("error: {err}"),
        }

        if app.tick(Instant::now()) {
            println!("{}", app.page());
        }
    }

    Ok(())
}

/// Maps one command line onto presenter events; returns whether the page
/// should be reprinted.
fn handle_command<S: TodoStore>(
    app: &mut TodoApp<S, JinjaRenderer>,
    input: &str,
) -> Result<bool, Box<dyn Error>> {
    let now = Instant::now();
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "add" => {
            app.dispatch(AppEvent::NewTodoInput(rest.to_string()), now)?;
            app.dispatch(AppEvent::NewTodoSubmit, now)?;
            Ok(true)
        }
        "type" => {
            app.dispatch(AppEvent::NewTodoInput(rest.to_string()), now)?;
            Ok(false)
        }
        "toggle" => {
            let id = id_at(app, rest)?;
            app.dispatch(AppEvent::Item(id, ItemEvent::Toggle), now)?;
            Ok(true)
        }
        "edit" => {
            let (position, text) = rest
                .split_once(' ')
                .ok_or("usage: edit <n> <text>")?;
            let id = id_at(app, position)?;
            app.dispatch(AppEvent::Item(id, ItemEvent::StartEdit), now)?;
            app.dispatch(
                AppEvent::Item(id, ItemEvent::EditInput(text.trim().to_string())),
                now,
            )?;
            app.dispatch(AppEvent::Item(id, ItemEvent::CommitEdit), now)?;
            Ok(true)
        }
        "rm" => {
            let id = id_at(app, rest)?;
            app.dispatch(AppEvent::Item(id, ItemEvent::Delete), now)?;
            Ok(true)
        }
        "clear" => {
            app.dispatch(AppEvent::ClearCompleted, now)?;
            Ok(true)
        }
        "ls" => Ok(true),
        "help" => {
            print_help();
            Ok(false)
        }
        other => Err(format!("unknown command `{other}`; try `help`").into()),
    }
}

/// Resolves a 1-based list position to the record id at that position.
fn id_at<S: TodoStore>(
    app: &TodoApp<S, JinjaRenderer>,
    position: &str,
) -> Result<TodoId, Box<dyn Error>> {
    let position: usize = position
        .parse()
        .map_err(|_| format!("expected a list position, got `{position}`"))?;
    if position == 0 {
        return Err("list positions start at 1".into());
    }
    app.todos()
        .iter()
        .nth(position - 1)
        .map(|todo| todo.id)
        .ok_or_else(|| format!("no todo at position {position}").into())
}

fn print_help() {
    println!("commands:");
    println!("  add <text>       create a todo");
    println!("  type <text>      type into the new-todo input");
    println!("  toggle <n>       flip completion of the n-th todo");
    println!("  edit <n> <text>  replace the text of the n-th todo");
    println!("  rm <n>           delete the n-th todo");
    println!("  clear            delete all completed todos");
    println!("  ls               reprint the page");
    println!("  quit             exit");
}
