//! Favorites: the named, persisted collection of saved ideas.
//!
//! The composed sentence is the record identity. Saving is a toggle on
//! that identity, so the list never holds the same sentence twice. Every
//! mutation is load-modify-write of the whole document; the write is the
//! commit point. Two payload generations exist on disk (plain sentence
//! arrays from 0.1.x and the current object form); legacy payloads are
//! upgraded once at load time and written back immediately.

use crate::core::error::IdeapodError;
use crate::core::localstore::{self, FAVORITES_DOC, UNDO_DOC};
use crate::core::store::Store;
use crate::core::time::now_millis;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One saved idea. `name` and `timestamp` are absent on records migrated
/// from the legacy format; serialization omits absent fields so the
/// document stays byte-compatible with historical payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteIdea {
    pub idea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// The payload generations found on disk. `Current` must come first so an
/// empty array resolves to the current form without a migration write.
#[derive(Deserialize)]
#[serde(untagged)]
enum FavoritesPayload {
    Current(Vec<FavoriteIdea>),
    Legacy(Vec<String>),
}

/// What `load` found, so callers can report upgrades and recoveries.
#[derive(Debug)]
pub struct LoadReport {
    pub entries: Vec<FavoriteIdea>,
    /// A legacy payload was upgraded and persisted this load.
    pub migrated: bool,
    /// The payload was unreadable and the list reset to empty (in memory
    /// only; nothing is written until the next mutation).
    pub recovered: bool,
}

pub enum ToggleOutcome {
    Saved(FavoriteIdea),
    Removed(FavoriteIdea),
}

pub fn load(store: &Store) -> Result<LoadReport, IdeapodError> {
    let Some(text) = localstore::read_raw(store, FAVORITES_DOC)? else {
        return Ok(LoadReport {
            entries: Vec::new(),
            migrated: false,
            recovered: false,
        });
    };
    match serde_json::from_str::<FavoritesPayload>(&text) {
        Ok(FavoritesPayload::Current(entries)) => Ok(LoadReport {
            entries,
            migrated: false,
            recovered: false,
        }),
        Ok(FavoritesPayload::Legacy(sentences)) => {
            let entries: Vec<FavoriteIdea> = sentences
                .into_iter()
                .map(|idea| FavoriteIdea {
                    idea,
                    name: None,
                    timestamp: None,
                })
                .collect();
            persist(store, &entries)?;
            Ok(LoadReport {
                entries,
                migrated: true,
                recovered: false,
            })
        }
        Err(_) => Ok(LoadReport {
            entries: Vec::new(),
            migrated: false,
            recovered: true,
        }),
    }
}

pub fn persist(store: &Store, entries: &[FavoriteIdea]) -> Result<(), IdeapodError> {
    localstore::write_doc(store, FAVORITES_DOC, entries)
}

/// Next default name: `"Idea N"` where N is one past the highest strictly
/// numeric suffix among names of the form `"Idea <digits>"`. User-typed
/// names that happen to match the pattern count too.
pub fn default_name(entries: &[FavoriteIdea]) -> String {
    let next = entries
        .iter()
        .filter_map(|e| e.name.as_deref())
        .filter_map(|n| n.strip_prefix("Idea "))
        .filter_map(|rest| rest.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1);
    format!("Idea {}", next)
}

/// Save-or-unsave by sentence identity. Present removes, absent appends
/// with a fresh default name and timestamp.
pub fn toggle_save(store: &Store, sentence: &str) -> Result<ToggleOutcome, IdeapodError> {
    let mut loaded = load(store)?;
    if let Some(pos) = loaded.entries.iter().position(|e| e.idea == sentence) {
        let removed = loaded.entries.remove(pos);
        persist(store, &loaded.entries)?;
        return Ok(ToggleOutcome::Removed(removed));
    }
    let record = FavoriteIdea {
        idea: sentence.to_string(),
        name: Some(default_name(&loaded.entries)),
        timestamp: Some(now_millis()),
    };
    loaded.entries.push(record.clone());
    persist(store, &loaded.entries)?;
    Ok(ToggleOutcome::Saved(record))
}

/// Rename the record at a true store index. Leading whitespace is
/// stripped (trailing is kept as typed); an empty result clears the name
/// so display falls back to the positional label.
pub fn rename(store: &Store, index: usize, raw: &str) -> Result<FavoriteIdea, IdeapodError> {
    let mut loaded = load(store)?;
    let entry = loaded
        .entries
        .get_mut(index)
        .ok_or_else(|| IdeapodError::NotFound(format!("no favorite at index {}", index)))?;
    let cleaned = raw.trim_start();
    entry.name = if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    };
    let updated = entry.clone();
    persist(store, &loaded.entries)?;
    Ok(updated)
}

/// Remove and return the record at a true store index.
pub fn remove(store: &Store, index: usize) -> Result<FavoriteIdea, IdeapodError> {
    let mut loaded = load(store)?;
    if index >= loaded.entries.len() {
        return Err(IdeapodError::NotFound(format!(
            "no favorite at index {}",
            index
        )));
    }
    let removed = loaded.entries.remove(index);
    persist(store, &loaded.entries)?;
    Ok(removed)
}

/// Undo primitive: splice a record back at its original position. The
/// index clamps to the current length, so it stays valid even after
/// further removals.
pub fn insert_at(store: &Store, index: usize, record: FavoriteIdea) -> Result<(), IdeapodError> {
    let mut loaded = load(store)?;
    let at = index.min(loaded.entries.len());
    loaded.entries.insert(at, record);
    persist(store, &loaded.entries)
}

/// Write the whole list as a pretty JSON array. Returns `None` (and
/// writes nothing) when there are no favorites to export.
pub fn export_all(store: &Store, out: &Path) -> Result<Option<usize>, IdeapodError> {
    let loaded = load(store)?;
    if loaded.entries.is_empty() {
        return Ok(None);
    }
    let text = serde_json::to_string_pretty(&loaded.entries)?;
    fs::write(out, text)?;
    Ok(Some(loaded.entries.len()))
}

/// The default export file name.
pub const EXPORT_FILE: &str = "game-ideas.json";

/// The most recent removal, kept so it can be spliced back in. The window
/// is caller policy; the store only records when the removal happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoSlot {
    pub entry: FavoriteIdea,
    pub index: usize,
    pub removed_at_ms: u64,
}

pub fn record_undo(store: &Store, slot: &UndoSlot) -> Result<(), IdeapodError> {
    localstore::write_doc(store, UNDO_DOC, slot)
}

/// Claim the pending undo slot, clearing it. `None` when nothing is pending.
pub fn take_undo(store: &Store) -> Result<Option<UndoSlot>, IdeapodError> {
    let slot = localstore::read_doc::<UndoSlot>(store, UNDO_DOC)?;
    if slot.is_some() {
        localstore::remove_doc(store, UNDO_DOC)?;
    }
    Ok(slot)
}

/// On-disk state of the favorites document, for diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub enum FavoritesHealth {
    Missing,
    Current(usize),
    Legacy(usize),
    Corrupt,
}

/// Probe the favorites document without touching it. Unlike `load`, a
/// legacy payload is reported, not upgraded.
pub fn inspect(store: &Store) -> Result<FavoritesHealth, IdeapodError> {
    let Some(text) = localstore::read_raw(store, FAVORITES_DOC)? else {
        return Ok(FavoritesHealth::Missing);
    };
    match serde_json::from_str::<FavoritesPayload>(&text) {
        Ok(FavoritesPayload::Current(entries)) => Ok(FavoritesHealth::Current(entries.len())),
        Ok(FavoritesPayload::Legacy(sentences)) => Ok(FavoritesHealth::Legacy(sentences.len())),
        Err(_) => Ok(FavoritesHealth::Corrupt),
    }
}
