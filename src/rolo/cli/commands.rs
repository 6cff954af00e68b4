//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Decides the process exit code (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, build `RoloApi`
//! 3. **Logging**: Install the tracing subscriber (stderr, `ROLO_LOG` or `--verbose`)
//! 4. **API Dispatch**: Call the appropriate `RoloApi` method
//! 5. **Output Formatting**: Convert `CmdResult` into terminal output
//!
//! Contact numbers are parsed here, 1-based, and handed to the API as canonical
//! 0-based indexes.

use super::print::{print_config, print_contacts, print_messages};
use super::prompt::{prompt_contact, FieldOverrides, HtmlOutput, TerminalConfirm};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rolo::api::{CmdMessage, ConfigAction, RoloApi};
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::index::DisplayIndex;
use rolo::model::Contact;
use rolo::store::fs::FileStore;
use rolo::surface::AutoConfirm;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (config.json and the collection live there).
const HOME_ENV: &str = "ROLO_HOME";
/// Standard `EnvFilter` directives, e.g. `ROLO_LOG=rolo=trace`.
const LOG_ENV: &str = "ROLO_LOG";

struct AppContext {
    api: RoloApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, email, phone }) => {
            handle_add(&mut ctx, Contact::new(name, email, phone))
        }
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term)),
        Some(Commands::Edit {
            index,
            name,
            email,
            phone,
        }) => handle_edit(&mut ctx, &index, FieldOverrides { name, email, phone }),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut ctx, &index, yes),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, &from, &to),
        Some(Commands::Render { search }) => handle_render(&mut ctx, search),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "rolo=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    tracing::debug!(dir = %data_dir.display(), "using data directory");

    let config = RoloConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read config, using defaults");
        RoloConfig::default()
    });
    let store = FileStore::new(data_dir.clone());

    Ok(AppContext {
        api: RoloApi::new(store, &config, data_dir),
    })
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolo", "rolo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RoloError::Store("Could not determine a data directory".to_string()))
}

/// Parses a 1-based contact number and checks it names an existing contact.
fn resolve_index(ctx: &AppContext, arg: &str) -> Result<usize> {
    let index: DisplayIndex = arg.parse()?;
    let len = ctx.api.book().collection().len();
    if index.canonical() >= len {
        return Err(RoloError::Api(format!(
            "No contact number {} ({} total)",
            index, len
        )));
    }
    Ok(index.canonical())
}

fn handle_add(ctx: &mut AppContext, contact: Contact) -> Result<()> {
    let result = ctx.api.add_contact(contact)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search(&term),
        None => ctx.api.list(),
    };
    print_contacts(&result.view);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: &str, overrides: FieldOverrides) -> Result<()> {
    let index = resolve_index(ctx, index)?;
    let began = ctx.api.begin_edit(index)?;
    let current = began.form.unwrap_or_else(|| Contact::new("", "", ""));

    let edited = if overrides.is_empty() {
        prompt_contact(&current)?
    } else {
        overrides.apply(&current)
    };

    if edited == current {
        let result = ctx.api.cancel_edit();
        print_messages(&result.messages);
        return Ok(());
    }

    let result = ctx.api.save_edit(edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: &str, yes: bool) -> Result<()> {
    let index = resolve_index(ctx, index)?;
    let result = if yes {
        ctx.api.delete_contact(index, &mut AutoConfirm(true))?
    } else {
        ctx.api.delete_contact(index, &mut TerminalConfirm::new())?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: &str, to: &str) -> Result<()> {
    let from: DisplayIndex = from.parse()?;
    let to: DisplayIndex = to.parse()?;
    let mut result = ctx.api.move_contact(from.canonical(), to.canonical())?;
    if result.messages.is_empty() {
        result.add_message(CmdMessage::info("Nothing moved."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_render(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    if let Some(term) = search {
        ctx.api.search(&term);
    }
    ctx.api.render_with(&mut HtmlOutput);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config, result.config_path.as_deref());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
