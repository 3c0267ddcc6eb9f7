//! CLI struct definitions for the ideapod command-line interface.
//!
//! Only the root surface lives here. Each plugin owns its own clap
//! structs and its dispatch entry point.

use crate::plugins::{config, doctor, favorites, generate};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "ideapod",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ideapod is the local-first game idea generator: roll a premise from six word categories, lock the parts you like, and keep the winners in a favorites shelf you can search, sort, rename, and export. 🎮",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Roll a new idea (locked categories keep their words)
    #[clap(name = "generate", visible_alias = "g")]
    Generate(generate::GenerateCli),

    /// Show the current idea
    #[clap(name = "current", visible_alias = "c")]
    Current(generate::CurrentCli),

    /// Lock categories so the next roll keeps them
    #[clap(name = "lock")]
    Lock(generate::LockCli),

    /// Unlock categories
    #[clap(name = "unlock")]
    Unlock(generate::UnlockCli),

    /// Show lock state for all categories
    #[clap(name = "locks")]
    Locks(generate::LocksCli),

    /// Manage saved ideas
    #[clap(name = "favorites", visible_alias = "f")]
    Favorites(favorites::FavoritesCli),

    /// Inspect and change settings
    #[clap(name = "config")]
    Config(config::ConfigCli),

    /// Check the health of stored data
    #[clap(name = "doctor")]
    Doctor(doctor::DoctorCli),

    /// Show version information
    #[clap(name = "version")]
    Version,
}
