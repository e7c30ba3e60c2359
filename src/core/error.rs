//! Error types for the Blockworld crate

use thiserror::Error;

/// Main error type for the crate
///
/// World queries and meshing never fail; this only covers the surfaces
/// that touch the filesystem or user-supplied configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
