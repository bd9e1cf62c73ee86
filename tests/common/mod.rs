//! Common test utilities for Inkpost integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test site for integration tests: a temp directory with a `posts/`
/// content directory inside it.
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the site root (the working directory for commands)
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new test site with an empty posts directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("posts")).expect("Failed to create posts directory");
        Self { temp, path }
    }

    /// Write a content file into the posts directory
    #[allow(dead_code)]
    pub fn write_post(&self, name: &str, content: &str) {
        let file_path = self.path.join("posts").join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write post");
    }

    /// Write a tag registry file into the posts directory
    #[allow(dead_code)]
    pub fn write_registry(&self, name: &str, content: &str) {
        let file_path = self.path.join("posts").join(name);
        std::fs::write(&file_path, content).expect("Failed to write registry");
    }

    /// Create a site with a small set of dated posts
    #[allow(dead_code)]
    pub fn with_sample_posts() -> Self {
        let site = Self::new();
        site.write_post(
            "2024-01-05-api-docs.md",
            "---\ntitle: \"API Documentation\"\nexcerpt: Writing docs developers use\ndate: 2024-01-05\nreadTime: 8 min read\ntags: [API, Docs]\n---\n# API Documentation\n\nBody text.\n",
        );
        site.write_post(
            "2024-01-20-docs-as-code.md",
            "---\ntitle: \"Docs as Code\"\ndate: 2024-01-20\ntags: [Docs, Workflow]\nfeatured: true\n---\nTreat documentation like code.\n",
        );
        site.write_post(
            "plain-note.md",
            "A note with no frontmatter at all.\n",
        );
        site
    }
}
