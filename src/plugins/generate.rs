//! Idea rolling: fresh rolls, the current idea, and category locks.
//!
//! The session document carries the current parts and lock flags between
//! invocations, so a locked category keeps its value across as many rolls
//! as the user likes.

use crate::core::error::IdeapodError;
use crate::core::favorites;
use crate::core::idea::{self, IdeaParts, LockState};
use crate::core::lexicon::Category;
use crate::core::session::{self, Session};
use crate::core::settings;
use crate::core::store::Store;
use crate::core::time::command_envelope;
use crate::core::tui::{self, BoxStyle, ItemStatus};
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct GenerateCli {
    /// Lock these categories before rolling (they stay locked after).
    #[clap(long = "lock", value_enum, value_name = "CATEGORY")]
    lock: Vec<Category>,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CurrentCli {
    /// Print only the bare sentence, for piping.
    #[clap(long)]
    raw: bool,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct LockCli {
    /// Categories to lock.
    #[clap(value_enum, value_name = "CATEGORY", required = true)]
    categories: Vec<Category>,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct UnlockCli {
    /// Categories to unlock.
    #[clap(value_enum, value_name = "CATEGORY", required_unless_present = "all")]
    categories: Vec<Category>,
    /// Unlock every category.
    #[clap(long)]
    all: bool,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct LocksCli {
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn render_idea_card(
    store: &Store,
    title: &str,
    style: BoxStyle,
    parts: &IdeaParts,
    locks: &LockState,
) -> Result<(), IdeapodError> {
    let theme = settings::load(store)?.theme.resolve();
    tui::render_box(title, "", style);
    println!();
    println!("  {}", tui::colorized_sentence(parts, theme));
    println!();
    for cat in Category::ALL {
        let marker = if locks.is_locked(cat) { "🔒" } else { "  " };
        println!(
            "  {:<12} {} {}",
            cat.label(),
            marker,
            tui::paint(parts.get(cat), cat, theme)
        );
    }
    println!();
    Ok(())
}

pub fn run_generate_cli(store: &Store, cli: GenerateCli) -> Result<(), IdeapodError> {
    let mut sess = session::load(store)?;
    for cat in &cli.lock {
        sess.locks.set(*cat, true);
    }
    let parts = idea::generate(sess.parts.as_ref(), &sess.locks, &mut rand::thread_rng());
    let sentence = idea::compose(&parts);
    sess.parts = Some(parts.clone());
    session::save(store, &sess)?;

    match cli.format {
        OutputFormat::Json => {
            let out = command_envelope(
                "generate",
                "ok",
                serde_json::json!({
                    "sentence": sentence,
                    "parts": parts,
                    "locks": sess.locks,
                }),
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&out)
                    .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
            );
        }
        OutputFormat::Text => {
            render_idea_card(store, "NEW IDEA", BoxStyle::Magenta, &parts, &sess.locks)?;
            if sess.locks.any() {
                tui::print_status_line(
                    "Locked categories kept their value. `ideapod unlock --all` frees them.",
                    ItemStatus::Info,
                );
            }
        }
    }
    Ok(())
}

pub fn run_current_cli(store: &Store, cli: CurrentCli) -> Result<(), IdeapodError> {
    let sess = session::load(store)?;

    if cli.raw {
        let parts = sess
            .parts
            .as_ref()
            .ok_or_else(|| IdeapodError::NotFound("no current idea; run `ideapod generate`".to_string()))?;
        println!("{}", idea::compose(parts));
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => {
            let out = command_envelope(
                "current",
                "ok",
                serde_json::json!({
                    "sentence": sess.parts.as_ref().map(idea::compose),
                    "parts": sess.parts,
                    "locks": sess.locks,
                }),
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&out)
                    .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
            );
        }
        OutputFormat::Text => match &sess.parts {
            Some(parts) => {
                render_idea_card(store, "CURRENT IDEA", BoxStyle::Info, parts, &sess.locks)?;
                let sentence = idea::compose(parts);
                let saved = favorites::load(store)?
                    .entries
                    .into_iter()
                    .find(|e| e.idea == sentence);
                if let Some(entry) = saved {
                    let label = entry.name.unwrap_or_else(|| "unnamed".to_string());
                    tui::print_status_line(
                        &format!("In favorites as '{}'.", label),
                        ItemStatus::Created,
                    );
                }
            }
            None => {
                tui::print_status_line("No idea yet. Run `ideapod generate`.", ItemStatus::Unchanged);
            }
        },
    }
    Ok(())
}

fn locks_envelope(cmd: &str, session: &Session) -> serde_json::Value {
    command_envelope(cmd, "ok", serde_json::json!({ "locks": session.locks }))
}

fn print_locks(session: &Session) {
    for cat in Category::ALL {
        let state = if session.locks.is_locked(cat) {
            "🔒 locked"
        } else {
            "🔓 free"
        };
        let value = session
            .parts
            .as_ref()
            .map(|p| p.get(cat))
            .filter(|v| !v.is_empty())
            .unwrap_or("-");
        println!("- {:<12} {:<10} {}", cat.label(), state, value);
    }
}

pub fn run_lock_cli(store: &Store, cli: LockCli) -> Result<(), IdeapodError> {
    let mut sess = session::load(store)?;
    for cat in &cli.categories {
        sess.locks.set(*cat, true);
    }
    session::save(store, &sess)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&locks_envelope("lock", &sess))
                    .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
            );
        }
        OutputFormat::Text => {
            let names: Vec<&str> = cli.categories.iter().map(|c| c.label()).collect();
            tui::print_status_line(&format!("Locked: {}.", names.join(", ")), ItemStatus::Updated);
            if sess.parts.is_none() {
                tui::print_status_line(
                    "No idea rolled yet; locks bind from the second roll.",
                    ItemStatus::Info,
                );
            }
        }
    }
    Ok(())
}

pub fn run_unlock_cli(store: &Store, cli: UnlockCli) -> Result<(), IdeapodError> {
    let mut sess = session::load(store)?;
    if cli.all {
        sess.locks = LockState::default();
    } else {
        for cat in &cli.categories {
            sess.locks.set(*cat, false);
        }
    }
    session::save(store, &sess)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&locks_envelope("unlock", &sess))
                    .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
            );
        }
        OutputFormat::Text => {
            if cli.all {
                tui::print_status_line("All categories unlocked.", ItemStatus::Updated);
            } else {
                let names: Vec<&str> = cli.categories.iter().map(|c| c.label()).collect();
                tui::print_status_line(
                    &format!("Unlocked: {}.", names.join(", ")),
                    ItemStatus::Updated,
                );
            }
        }
    }
    Ok(())
}

pub fn run_locks_cli(store: &Store, cli: LocksCli) -> Result<(), IdeapodError> {
    let sess = session::load(store)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&locks_envelope("locks", &sess))
                    .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
            );
        }
        OutputFormat::Text => {
            print_locks(&sess);
        }
    }
    Ok(())
}
