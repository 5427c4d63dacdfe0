use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlankitError {
    #[error("git not found on PATH")]
    GitNotFound,

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("failed to spawn '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlankitError>;
