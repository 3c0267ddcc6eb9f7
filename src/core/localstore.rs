//! File-per-key JSON document access under the store's data directory.
//!
//! This is the persistence thin waist: every subsystem reads and writes
//! whole documents through these helpers. Reads are fail-soft (missing
//! and undecodable payloads surface as absent); writes create the data
//! directory on demand, overwrite the whole file, and report failures.

use crate::core::error::IdeapodError;
use crate::core::store::Store;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

pub const FAVORITES_DOC: &str = "favorites.json";
pub const THEME_DOC: &str = "theme.json";
pub const COLORED_FAVORITES_DOC: &str = "colored_favorites.json";
pub const SESSION_DOC: &str = "session.json";
pub const UNDO_DOC: &str = "undo.json";

/// Every document the store can hold, for diagnostics.
pub const ALL_DOCS: &[&str] = &[
    FAVORITES_DOC,
    THEME_DOC,
    COLORED_FAVORITES_DOC,
    SESSION_DOC,
    UNDO_DOC,
];

/// Raw text of a document, `None` when it has never been written.
pub fn read_raw(store: &Store, doc: &str) -> Result<Option<String>, IdeapodError> {
    match fs::read_to_string(store.doc_path(doc)) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(IdeapodError::IoError(e)),
    }
}

/// Decode a document. Missing and undecodable payloads both come back as
/// `None`; storage corruption is never fatal to a read.
pub fn read_doc<T: DeserializeOwned>(store: &Store, doc: &str) -> Result<Option<T>, IdeapodError> {
    match read_raw(store, doc)? {
        Some(text) => Ok(serde_json::from_str(&text).ok()),
        None => Ok(None),
    }
}

/// Overwrite a document in full. The write is the commit point between
/// processes, so failures are surfaced rather than swallowed.
pub fn write_doc<T: Serialize + ?Sized>(
    store: &Store,
    doc: &str,
    value: &T,
) -> Result<(), IdeapodError> {
    fs::create_dir_all(store.data_dir())?;
    let text = serde_json::to_string(value)?;
    fs::write(store.doc_path(doc), text)?;
    Ok(())
}

/// Delete a document. Missing files are fine.
pub fn remove_doc(store: &Store, doc: &str) -> Result<(), IdeapodError> {
    match fs::remove_file(store.doc_path(doc)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(IdeapodError::IoError(e)),
    }
}
