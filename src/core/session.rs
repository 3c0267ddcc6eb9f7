//! The rolling session: current idea and lock state between invocations.
//!
//! A CLI process exits after every command, so the idea on deck and the
//! lock flags persist as one document. A missing or unreadable session
//! is simply a fresh one.

use crate::core::error::IdeapodError;
use crate::core::idea::{IdeaParts, LockState};
use crate::core::localstore::{self, SESSION_DOC};
use crate::core::store::Store;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub parts: Option<IdeaParts>,
    pub locks: LockState,
}

pub fn load(store: &Store) -> Result<Session, IdeapodError> {
    Ok(localstore::read_doc::<Session>(store, SESSION_DOC)?.unwrap_or_default())
}

pub fn save(store: &Store, session: &Session) -> Result<(), IdeapodError> {
    localstore::write_doc(store, SESSION_DOC, session)
}
