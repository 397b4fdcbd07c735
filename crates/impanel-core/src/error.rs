//! Error types for impanel-core

use thiserror::Error;

use crate::client::SearchError;
use crate::config::ConfigError;

/// Result type alias for impanel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Main error type for impanel operations
#[derive(Error, Debug)]
pub enum PanelError {
    /// Search-related errors
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
