//! Ideapod: a game idea generator that lives in your terminal.
//!
//! **Ideapod is a local-first idea machine for game jams.**
//!
//! Six word categories (tone, genre, mechanic, perspective, role, twist)
//! combine into a one-sentence premise. Roll until something lands, lock
//! the parts worth keeping, and save the winners to a favorites shelf
//! you can search, sort, rename, export, and un-delete.
//!
//! # Core Principles
//!
//! - **Local-first**: every document lives under `~/.ideapod/data/` as plain JSON
//! - **One sentence**: ideas render to a fixed grammar and parse back out of it
//! - **Forgiving**: unreadable documents degrade to defaults instead of aborting
//!
//! # Layout
//!
//! - `core`: lexicon, composer, parser, favorites, query, settings, persistence
//! - `plugins`: one module per command group (`generate`, `favorites`, `config`, `doctor`)
//!
//! # Examples
//!
//! ```bash
//! # Roll a premise
//! ideapod generate
//!
//! # Keep the genre, reroll everything else
//! ideapod lock genre
//! ideapod generate
//!
//! # Save it, then find it later
//! ideapod favorites save
//! ideapod favorites list --search boss
//! ```

mod cli;
pub mod core;
pub mod plugins;

use crate::cli::{Cli, Command};
use crate::core::error::IdeapodError;
use crate::core::store::{self, Store};
use clap::Parser;

pub fn run() -> Result<(), IdeapodError> {
    let cli = Cli::parse();

    // Version works even when the home directory cannot be resolved.
    if matches!(cli.command, Command::Version) {
        println!("v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let root = store::resolve_store_root()?;
    let store = Store::at(root);
    std::fs::create_dir_all(store.data_dir()).map_err(IdeapodError::IoError)?;

    match cli.command {
        Command::Generate(generate_cli) => {
            plugins::generate::run_generate_cli(&store, generate_cli)?;
        }
        Command::Current(current_cli) => {
            plugins::generate::run_current_cli(&store, current_cli)?;
        }
        Command::Lock(lock_cli) => {
            plugins::generate::run_lock_cli(&store, lock_cli)?;
        }
        Command::Unlock(unlock_cli) => {
            plugins::generate::run_unlock_cli(&store, unlock_cli)?;
        }
        Command::Locks(locks_cli) => {
            plugins::generate::run_locks_cli(&store, locks_cli)?;
        }
        Command::Favorites(favorites_cli) => {
            plugins::favorites::run_favorites_cli(&store, favorites_cli)?;
        }
        Command::Config(config_cli) => {
            plugins::config::run_config_cli(&store, config_cli)?;
        }
        Command::Doctor(doctor_cli) => {
            plugins::doctor::run_doctor_cli(&store, doctor_cli)?;
        }
        Command::Version => {}
    }
    Ok(())
}
