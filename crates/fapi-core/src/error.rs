//! Error taxonomy for scaffolding operations
//!
//! Structural failures (destination exists, project or expected
//! subdirectory missing) and I/O failures propagate to the command
//! boundary. Template retrieval failure is deliberately NOT part of this
//! taxonomy - it is absorbed by the materializer, which falls back to
//! generated content instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scaffolding command
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("project directory '{}' does not exist", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("routers directory not found in '{}'", .0.display())]
    RoutersDirMissing(PathBuf),

    #[error("models directory not found in '{}'", .0.display())]
    ModelsDirMissing(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
