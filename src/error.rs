// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11ylint

use thiserror::Error;

pub type Result<T> = std::result::Result<T, A11ylintError>;

#[derive(Error, Debug)]
pub enum A11ylintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be turned into a tree. Callers that want the
    /// original degrade-to-empty behavior map this to zero diagnostics.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
