//! Central tag registry configuration
//!
//! A static file mapping tag names to a configured color and optional
//! description, loaded once at startup. The registry is consulted when a
//! document supplies no color override for a tag. Missing files are not
//! an error; resolution degrades to automatic assignment.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InkpostError, Result};

/// File names probed in the content directory, in order.
const REGISTRY_FILE_NAMES: [&str; 2] = ["tags.yaml", "tags.json"];

/// A configured tag entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDefinition {
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Process-wide tag registry (tags.yaml / tags.json).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRegistry {
    #[serde(default)]
    pub tags: BTreeMap<String, TagDefinition>,
}

impl TagRegistry {
    /// Empty registry; every lookup falls through to automatic assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from a file path. YAML unless the extension is
    /// `.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| InkpostError::RegistryReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let registry = if is_json {
            serde_json::from_str(&content).map_err(|e| InkpostError::RegistryParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| InkpostError::RegistryParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        };

        Ok(registry)
    }

    /// Load the registry for a content directory: an explicit path wins,
    /// otherwise the directory is probed for `tags.yaml` then `tags.json`.
    /// No file present yields an empty registry.
    pub fn load(content_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for name in REGISTRY_FILE_NAMES {
            let candidate = content_dir.join(name);
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::new())
    }

    /// Look up a configured entry by exact tag name.
    pub fn get(&self, tag: &str) -> Option<&TagDefinition> {
        self.tags.get(tag)
    }
}
