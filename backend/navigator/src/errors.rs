//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Navigation loop is no longer running")]
    LoopClosed,
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
