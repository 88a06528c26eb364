//! The `todoz` command line client: argument parsing, context setup,
//! logging and terminal output. Everything here sits on top of
//! [`todoz::api::TodoApi`].

mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use todoz::api::{ConfigAction, TodoApi};
use todoz::config::TodozConfig;
use todoz::error::{Result, TodoError};
use todoz::store::TodoStore;
use todoz::store::fs_backend::FsBackend;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (store and config).
const HOME_ENV: &str = "TODOZ_HOME";
/// `EnvFilter` directives for log output, e.g. `TODOZ_LOG=todoz=debug`.
const LOG_ENV: &str = "TODOZ_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut api = init_api()?;

    match cli.command {
        Some(Commands::List { filter }) => print::print_listing(&api.list_todos(filter)?),
        None => print::print_listing(&api.list_todos(None)?),
        Some(Commands::Add { text }) => print::print_result(&api.add_todo(&text)?),
        Some(Commands::Toggle { todos }) => print::print_result(&api.toggle_todos(&todos)?),
        Some(Commands::Edit { todo, text }) => {
            print::print_result(&api.update_todo(&todo, &text)?)
        }
        Some(Commands::Delete { todos }) => print::print_result(&api.delete_todos(&todos)?),
        Some(Commands::Clear) => print::print_result(&api.clear_completed()?),
        Some(Commands::Path) => print::print_result(&api.storage_path()),
        Some(Commands::Config { key, value }) => {
            print::print_result(&api.config(config_action(key, value))?)
        }
    }

    Ok(())
}

fn config_action(key: Option<String>, value: Option<String>) -> ConfigAction {
    match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("Could not determine data directory".to_string()))
}

fn init_api() -> Result<TodoApi<FsBackend>> {
    let dir = data_dir()?;
    let config = TodozConfig::load(&dir)?;
    tracing::debug!(dir = %dir.display(), key = %config.storage_key, "opening store");

    let store = TodoStore::open_with_key(FsBackend::new(dir.clone()), config.storage_key);
    Ok(TodoApi::new(store, dir).with_default_filter(config.default_filter))
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
