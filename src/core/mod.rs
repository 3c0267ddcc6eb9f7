//! Core modules for Ideapod's domain and storage.
//!
//! Everything the CLI surfaces build on lives here: the lexicon, the
//! composer/parser pair, the favorites store, and the shared plumbing
//! (documents, settings, session, terminal output).

pub mod error;
pub mod favorites;
pub mod idea;
pub mod lexicon;
pub mod localstore;
pub mod output;
pub mod parse;
pub mod query;
pub mod session;
pub mod settings;
pub mod store;
pub mod time;
pub mod tui;
