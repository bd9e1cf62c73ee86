//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use crate::content::PostLibrary;
use crate::error::Result;
use crate::tags::{TagColorResolver, TagRegistry};

/// Default content directory relative to the working directory.
const DEFAULT_CONTENT_DIR: &str = "posts";

/// Content directory from the CLI argument or the default location.
pub fn content_dir_path(content_dir: Option<PathBuf>) -> PathBuf {
    content_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR))
}

/// Load the post library for a content directory.
pub fn load_library(content_dir: &Path) -> Result<PostLibrary> {
    PostLibrary::load(content_dir)
}

/// Build the tag color resolver from the registry next to the content
/// (or an explicit registry path).
pub fn load_resolver(content_dir: &Path, tag_config: Option<&Path>) -> Result<TagColorResolver> {
    let registry = TagRegistry::load(content_dir, tag_config)?;
    Ok(TagColorResolver::new(registry))
}
