//! Command surface: one plugin per top-level command group.
//!
//! Each plugin owns its clap surface (`XxxCli`), its output envelopes,
//! and a `run_xxx_cli` entry point that takes the store and the parsed
//! arguments. Core modules never print; plugins do.

pub mod config;
pub mod doctor;
pub mod favorites;
pub mod generate;
