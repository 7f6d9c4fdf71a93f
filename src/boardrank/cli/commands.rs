//! Context wiring and per-command handlers.
//!
//! - `run()`: parses arguments, installs logging, dispatches
//! - `init_context()`: resolves store directories and builds the API
//! - `handle_*()`: call the API and print the result

use super::render::{print_messages, render_entries, render_keys, render_record_list};
use super::setup::{Cli, Commands, KeyCommands};
use boardrank::api::{BoardApi, BoardPaths, ConfigAction, MovePosition};
use boardrank::error::{BoardError, Result};
use boardrank::index::RecordPath;
use boardrank::model::Scope;
use boardrank::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PROJECT_DIR: &str = ".boardrank";
const HOME_ENV: &str = "BOARDRANK_HOME";
const LOG_ENV: &str = "BOARDRANK_LOG";

struct AppContext {
    api: BoardApi<FileStore>,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { words }) => handle_create(&mut ctx, words),
        Some(Commands::List { parent, depth }) => handle_list(&ctx, parent, depth),
        Some(Commands::Move {
            path,
            to,
            first,
            last: _,
            at,
        }) => {
            let position = match (first, at) {
                (true, _) => MovePosition::First,
                (false, Some(n)) => MovePosition::At(n),
                (false, None) => MovePosition::Last,
            };
            handle_move(&mut ctx, path, to, position)
        }
        Some(Commands::Reorder { parent, order }) => handle_reorder(&mut ctx, parent, order),
        Some(Commands::Import { file, into }) => handle_import(&mut ctx, file, into),
        Some(Commands::Delete { paths }) => handle_delete(&mut ctx, paths),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Key { command }) => handle_key(&ctx, command),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, None),
    }
}

/// Logs go to stderr so stdout stays clean for `key` output in scripts.
fn init_logging(verbose: bool) {
    let default = if verbose { "boardrank=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(PROJECT_DIR);
    let global_dir = global_data_dir()?;

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let store = FileStore::new(Some(project_dir.clone()), global_dir.clone());
    let paths = BoardPaths {
        project: Some(project_dir),
        global: global_dir,
    };

    Ok(AppContext {
        api: BoardApi::new(store, paths),
        scope,
    })
}

fn global_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "boardrank", "boardrank")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BoardError::Store("Could not determine the global data directory".into()))
}

/// Splits `words` into an optional parent path and the title.
///
/// The first word is the parent only when it parses as a path and more words
/// follow it.
fn split_parent(words: Vec<String>) -> (Option<String>, String) {
    match words.split_first() {
        Some((first, rest)) if !rest.is_empty() && first.parse::<RecordPath>().is_ok() => {
            (Some(first.clone()), rest.join(" "))
        }
        _ => (None, words.join(" ")),
    }
}

fn handle_create(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let (parent, title) = split_parent(words);
    let result = ctx.api.create(ctx.scope, parent.as_deref(), title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, parent: Option<String>, depth: Option<usize>) -> Result<()> {
    let result = ctx.api.list(ctx.scope, parent.as_deref(), depth)?;
    print!("{}", render_record_list(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    path: String,
    to: Option<String>,
    position: MovePosition,
) -> Result<()> {
    let result = ctx
        .api
        .move_record(ctx.scope, &path, to.as_deref(), position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reorder(
    ctx: &mut AppContext,
    parent: Option<String>,
    order: Option<Vec<usize>>,
) -> Result<()> {
    let result = ctx
        .api
        .reorder(ctx.scope, parent.as_deref(), order.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf, into: Option<String>) -> Result<()> {
    let result = ctx.api.import(ctx.scope, into.as_deref(), &file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, paths: Vec<String>) -> Result<()> {
    let result = ctx.api.delete(ctx.scope, &paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_key(ctx: &AppContext, command: KeyCommands) -> Result<()> {
    // `-` stands for an open end.
    fn side(arg: &Option<String>) -> Option<&str> {
        arg.as_deref().filter(|s| *s != "-")
    }

    let result = match &command {
        KeyCommands::Between { lower, upper } => ctx.api.key_between(side(lower), side(upper))?,
        KeyCommands::After { prev } => ctx.api.key_after(side(prev))?,
        KeyCommands::Before { next } => ctx.api.key_before(next)?,
        KeyCommands::Spaced { count } => ctx.api.key_spaced(*count)?,
    };
    print!("{}", render_keys(&result.keys));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        print!("{}", render_entries(&config.entries()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}
