use std::env;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeapodError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Path error: {0}")]
    PathError(String),
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] env::VarError),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
