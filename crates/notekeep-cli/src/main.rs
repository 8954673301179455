//! notekeep CLI - pin, favorite and search short notes from the terminal.

mod cli;
mod commands;
mod config;
mod error;


use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_init, run_config_show};
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::toggle::{run_toggle, Flag};
use crate::config::{CliConfig, EnvOverrides, StoreLocation};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notekeep=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell, output }) = &cli.command {
        return run_completions(*shell, output.as_deref());
    }
    if let Some(Commands::Config {
        command: ConfigCommands::Init,
    }) = &cli.command
    {
        return run_config_init(cli.data_dir, cli.storage_key);
    }

    let location = StoreLocation::resolve(
        cli.data_dir,
        cli.storage_key,
        EnvOverrides::from_env(),
        CliConfig::load()?,
    )?;
    tracing::debug!(
        "Using notes document '{}' in {}",
        location.storage_key,
        location.data_dir.display()
    );

    match cli.command {
        Some(Commands::Add { title, body }) => run_add(title.as_deref(), &body, &location)?,
        Some(Commands::List { query, limit, json }) => {
            run_list(query.as_deref(), limit, json, &location)?;
        }
        Some(Commands::Edit { id, title, body }) => run_edit(&id, title, body, &location)?,
        Some(Commands::Delete { id }) => run_delete(&id, &location)?,
        Some(Commands::Pin { id }) => run_toggle(Flag::Pinned, &id, &location)?,
        Some(Commands::Favorite { id }) => run_toggle(Flag::Favorite, &id, &location)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &location)?;
        }
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => run_config_show(&location)?,
        Some(Commands::Completions { .. } | Commands::Config { .. }) => {}
        None => {
            // Quick capture mode: notekeep "my thought"
            if cli.note.is_empty() {
                Cli::command().print_help()?;
                println!();
            } else {
                run_add(None, &cli.note, &location)?;
            }
        }
    }

    Ok(())
}
