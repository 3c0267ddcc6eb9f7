//! Favorites command group: save, list, rename, remove, undo, export.
//!
//! Rows shown by `list` are 1-based positions in the filtered and sorted
//! view. `rename` and `remove` re-run the same view (same flags) and
//! resolve the picked row back to the true store index, so acting on
//! "row 2 of my search" always hits the record the user is looking at.

use crate::core::error::IdeapodError;
use crate::core::favorites::{self, EXPORT_FILE, FavoriteIdea, ToggleOutcome, UndoSlot};
use crate::core::idea;
use crate::core::output::compact_line;
use crate::core::parse;
use crate::core::query::{self, SearchQuery, SortOption};
use crate::core::session;
use crate::core::settings;
use crate::core::store::Store;
use crate::core::time::{command_envelope, now_millis};
use crate::core::tui::{self, BoxStyle, ItemStatus};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How long a removal stays undoable.
const UNDO_WINDOW_MS: u64 = 60_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(name = "favorites", about = "Manage saved ideas.")]
pub struct FavoritesCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,
    #[clap(subcommand)]
    command: FavoritesCommand,
}

/// The view flags shared by every row-addressed command.
#[derive(clap::Args, Debug)]
struct ViewArgs {
    /// Filter by name (case-insensitive).
    #[clap(long)]
    search: Option<String>,
    /// Match the whole name instead of a substring.
    #[clap(long)]
    strict: bool,
    /// Row ordering.
    #[clap(long, value_enum, default_value = "default")]
    sort: SortOption,
}

impl ViewArgs {
    fn query(&self) -> SearchQuery {
        SearchQuery::new(self.search.as_deref().unwrap_or(""), self.strict)
    }
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// Toggle-save a sentence (defaults to the current idea).
    Save {
        /// Sentence to save; omit to use the current idea.
        #[clap(value_name = "SENTENCE")]
        sentence: Option<String>,
    },
    /// List favorites, filtered and sorted.
    List {
        #[clap(flatten)]
        view: ViewArgs,
        /// Colorize sentences even if the setting is off.
        #[clap(long, overrides_with = "plain")]
        colored: bool,
        /// Plain sentences even if the setting is on.
        #[clap(long, overrides_with = "colored")]
        plain: bool,
    },
    /// Rename the favorite at a view row.
    Rename {
        #[clap(value_name = "ROW")]
        row: usize,
        /// New name; whitespace-only clears the name.
        #[clap(value_name = "NAME")]
        name: String,
        #[clap(flatten)]
        view: ViewArgs,
    },
    /// Remove the favorite at a view row (undoable for a minute).
    Remove {
        #[clap(value_name = "ROW")]
        row: usize,
        #[clap(flatten)]
        view: ViewArgs,
    },
    /// Restore the last removal to its original position.
    Undo,
    /// Write all favorites to a JSON file.
    Export {
        /// Output path (defaults to ./game-ideas.json).
        #[clap(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn display_name(entry: &FavoriteIdea, true_index: usize) -> String {
    entry
        .name
        .clone()
        .unwrap_or_else(|| format!("Idea {}", true_index + 1))
}

/// Resolve a 1-based view row to the true store index.
fn resolve_row(
    entries: &[FavoriteIdea],
    view: &ViewArgs,
    row: usize,
) -> Result<usize, IdeapodError> {
    if row == 0 {
        return Err(IdeapodError::ValidationError(
            "rows are numbered from 1".to_string(),
        ));
    }
    let rows = query::filter_and_sort(entries, &view.query(), view.sort);
    rows.get(row - 1)
        .map(|(idx, _)| *idx)
        .ok_or_else(|| {
            IdeapodError::NotFound(format!("no row {} in this view ({} rows)", row, rows.len()))
        })
}

fn print_json(value: &serde_json::Value) -> Result<(), IdeapodError> {
    println!(
        "{}",
        serde_json::to_string_pretty(value)
            .map_err(|e| IdeapodError::ValidationError(e.to_string()))?
    );
    Ok(())
}

fn render_list(
    store: &Store,
    entries: &[FavoriteIdea],
    view: &ViewArgs,
    colorize: bool,
) -> Result<(), IdeapodError> {
    let query = view.query();
    let rows = query::filter_and_sort(entries, &query, view.sort);
    let searching = !query.text.is_empty();

    if entries.is_empty() {
        println!("No favorites yet. Save one with `ideapod favorites save`.");
        return Ok(());
    }

    tui::print_section(&format!("Favorites ({})", entries.len()));
    if view.sort != SortOption::Default {
        println!("  sorted: {}", view.sort.label());
    }
    println!();

    if rows.is_empty() {
        println!("  No favorites match.");
    }

    let theme = settings::load(store)?.theme.resolve();
    let width = tui::terminal_width().saturating_sub(8).max(32);
    for (pos, (idx, entry)) in rows.iter().enumerate() {
        let label = display_name(entry, *idx);
        if colorize {
            match parse::parse(&entry.idea) {
                Some(parts) => {
                    println!("{:>4}. {}", pos + 1, label);
                    println!("      {}", tui::colorized_sentence(&parts, theme));
                }
                None => {
                    println!("{:>4}. {}", pos + 1, label);
                    println!("      {}", entry.idea);
                }
            }
        } else {
            println!(
                "{:>4}. {}  ·  {}",
                pos + 1,
                label,
                compact_line(&entry.idea, width)
            );
        }
    }

    if searching {
        println!();
        println!("Showing {} of {} favorites.", rows.len(), entries.len());
    }
    Ok(())
}

fn list_envelope(entries: &[FavoriteIdea], view: &ViewArgs) -> serde_json::Value {
    let rows = query::filter_and_sort(entries, &view.query(), view.sort);
    let items: Vec<serde_json::Value> = rows
        .iter()
        .enumerate()
        .map(|(pos, (idx, entry))| {
            serde_json::json!({
                "row": pos + 1,
                "index": idx,
                "name": entry.name,
                "display_name": display_name(entry, *idx),
                "idea": entry.idea,
                "timestamp": entry.timestamp,
            })
        })
        .collect();
    command_envelope(
        "favorites.list",
        "ok",
        serde_json::json!({
            "count": entries.len(),
            "shown": items.len(),
            "items": items,
        }),
    )
}

pub fn run_favorites_cli(store: &Store, cli: FavoritesCli) -> Result<(), IdeapodError> {
    match cli.command {
        FavoritesCommand::Save { sentence } => {
            let sentence = match sentence {
                Some(s) => s,
                None => {
                    let sess = session::load(store)?;
                    match sess.parts.as_ref() {
                        Some(parts) => idea::compose(parts),
                        None => {
                            return Err(IdeapodError::ValidationError(
                                "nothing to save; run `ideapod generate` first or pass a sentence"
                                    .to_string(),
                            ));
                        }
                    }
                }
            };
            match favorites::toggle_save(store, &sentence)? {
                ToggleOutcome::Saved(record) => match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "favorites.save",
                        "ok",
                        serde_json::json!({ "saved": true, "record": record }),
                    ))?,
                    OutputFormat::Text => {
                        let label = record.name.as_deref().unwrap_or("unnamed");
                        tui::print_status_line(
                            &format!("Saved as '{}'. Find favorites with `ideapod favorites list`.", label),
                            ItemStatus::Created,
                        );
                    }
                },
                ToggleOutcome::Removed(record) => match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "favorites.save",
                        "ok",
                        serde_json::json!({ "saved": false, "record": record }),
                    ))?,
                    OutputFormat::Text => {
                        tui::print_status_line("Removed from favorites.", ItemStatus::Removed);
                    }
                },
            }
        }
        FavoritesCommand::List {
            view,
            colored,
            plain,
        } => {
            let loaded = favorites::load(store)?;
            match cli.format {
                OutputFormat::Json => print_json(&list_envelope(&loaded.entries, &view))?,
                OutputFormat::Text => {
                    if loaded.recovered {
                        tui::render_box(
                            "FAVORITES RESET",
                            "stored favorites were unreadable",
                            BoxStyle::Warning,
                        );
                    }
                    if loaded.migrated {
                        tui::print_status_line(
                            &format!(
                                "Upgraded {} favorites from the legacy format.",
                                loaded.entries.len()
                            ),
                            ItemStatus::Updated,
                        );
                    }
                    let colorize = if colored {
                        true
                    } else if plain {
                        false
                    } else {
                        settings::load(store)?.colored_favorites
                    };
                    render_list(store, &loaded.entries, &view, colorize)?;
                }
            }
        }
        FavoritesCommand::Rename { row, name, view } => {
            let loaded = favorites::load(store)?;
            let index = resolve_row(&loaded.entries, &view, row)?;
            let updated = favorites::rename(store, index, &name)?;
            match cli.format {
                OutputFormat::Json => print_json(&command_envelope(
                    "favorites.rename",
                    "ok",
                    serde_json::json!({ "index": index, "record": updated }),
                ))?,
                OutputFormat::Text => match &updated.name {
                    Some(n) => tui::print_status_line(
                        &format!("Renamed to '{}'.", n),
                        ItemStatus::Updated,
                    ),
                    None => tui::print_status_line(
                        &format!("Name cleared; it will show as 'Idea {}'.", index + 1),
                        ItemStatus::Updated,
                    ),
                },
            }
        }
        FavoritesCommand::Remove { row, view } => {
            let loaded = favorites::load(store)?;
            let index = resolve_row(&loaded.entries, &view, row)?;
            let removed = favorites::remove(store, index)?;
            let slot = UndoSlot {
                entry: removed.clone(),
                index,
                removed_at_ms: now_millis(),
            };
            favorites::record_undo(store, &slot)?;
            match cli.format {
                OutputFormat::Json => print_json(&command_envelope(
                    "favorites.remove",
                    "ok",
                    serde_json::json!({
                        "index": index,
                        "record": removed,
                        "undo_window_ms": UNDO_WINDOW_MS,
                    }),
                ))?,
                OutputFormat::Text => {
                    let label = display_name(&removed, index);
                    tui::print_status_line(
                        &format!("Removed from favorites: '{}'.", label),
                        ItemStatus::Removed,
                    );
                    tui::print_status_line(
                        "Run `ideapod favorites undo` within 60 seconds to restore.",
                        ItemStatus::Info,
                    );
                }
            }
        }
        FavoritesCommand::Undo => {
            let outcome = match favorites::take_undo(store)? {
                None => ("empty", None),
                Some(slot) => {
                    if now_millis().saturating_sub(slot.removed_at_ms) > UNDO_WINDOW_MS {
                        ("expired", None)
                    } else {
                        favorites::insert_at(store, slot.index, slot.entry.clone())?;
                        ("restored", Some(slot))
                    }
                }
            };
            match cli.format {
                OutputFormat::Json => {
                    let (reason, slot) = &outcome;
                    print_json(&command_envelope(
                        "favorites.undo",
                        "ok",
                        serde_json::json!({
                            "restored": slot.is_some(),
                            "outcome": reason,
                            "index": slot.as_ref().map(|s| s.index),
                            "record": slot.as_ref().map(|s| &s.entry),
                        }),
                    ))?;
                }
                OutputFormat::Text => match outcome {
                    ("empty", _) => {
                        tui::print_status_line("Nothing to undo.", ItemStatus::Unchanged)
                    }
                    ("expired", _) => {
                        tui::print_status_line("Undo window has passed.", ItemStatus::Fail)
                    }
                    (_, Some(slot)) => {
                        let label = display_name(&slot.entry, slot.index);
                        tui::print_status_line(
                            &format!("Restored! '{}' is back at row {}.", label, slot.index + 1),
                            ItemStatus::Created,
                        );
                    }
                    _ => {}
                },
            }
        }
        FavoritesCommand::Export { out } => {
            let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE));
            match favorites::export_all(store, &path)? {
                None => match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "favorites.export",
                        "ok",
                        serde_json::json!({ "exported": 0 }),
                    ))?,
                    OutputFormat::Text => {
                        tui::print_status_line("No favorites to download.", ItemStatus::Unchanged);
                    }
                },
                Some(count) => match cli.format {
                    OutputFormat::Json => print_json(&command_envelope(
                        "favorites.export",
                        "ok",
                        serde_json::json!({
                            "exported": count,
                            "path": path.display().to_string(),
                        }),
                    ))?,
                    OutputFormat::Text => {
                        tui::print_status_line(
                            &format!("Exported {} favorites to {}.", count, path.display()),
                            ItemStatus::Pass,
                        );
                    }
                },
            }
        }
    }
    Ok(())
}
