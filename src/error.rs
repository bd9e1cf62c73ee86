//! Error types and handling for Inkpost
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Inkpost operations
#[derive(Error, Diagnostic, Debug)]
pub enum InkpostError {
    // Content errors
    #[error("Content directory not found: {path}")]
    #[diagnostic(
        code(inkpost::content::dir_not_found),
        help("Point --content-dir at a directory of .md files")
    )]
    ContentDirNotFound { path: String },

    #[error("Failed to scan content directory: {path}")]
    #[diagnostic(code(inkpost::content::scan_failed))]
    ContentScanFailed { path: String, reason: String },

    #[error("Post not found: {slug}")]
    #[diagnostic(
        code(inkpost::content::post_not_found),
        help("Run 'inkpost list' to see available slugs")
    )]
    PostNotFound { slug: String },

    #[error("No posts found in: {path}")]
    #[diagnostic(
        code(inkpost::content::no_posts),
        help("Add at least one .md file to the content directory")
    )]
    NoPosts { path: String },

    // Tag registry errors
    #[error("Failed to read tag registry: {path}")]
    #[diagnostic(code(inkpost::registry::read_failed))]
    RegistryReadFailed { path: String, reason: String },

    #[error("Failed to parse tag registry: {path}")]
    #[diagnostic(
        code(inkpost::registry::parse_failed),
        help("The registry must map tag names to {{ color, description }} entries")
    )]
    RegistryParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(inkpost::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(inkpost::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InkpostError {
    fn from(err: std::io::Error) -> Self {
        InkpostError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for InkpostError {
    fn from(err: serde_yaml::Error) -> Self {
        InkpostError::RegistryParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InkpostError {
    fn from(err: serde_json::Error) -> Self {
        InkpostError::RegistryParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InkpostError>;
