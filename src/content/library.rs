//! Post library
//!
//! Discovers Markdown files under a content directory, parses each file
//! once, and serves the assembled posts newest-first. The library is
//! loaded at startup and treated as immutable afterwards.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::content::post::Post;
use crate::error::{InkpostError, Result};
use crate::frontmatter;

/// All posts loaded from a content directory, sorted newest-first.
#[derive(Debug)]
pub struct PostLibrary {
    root: PathBuf,
    posts: Vec<Post>,
}

impl PostLibrary {
    /// Load every `*.md` file under `root`.
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(InkpostError::ContentDirNotFound {
                path: root.display().to_string(),
            });
        }

        let mut posts = Vec::new();
        for path in discover_content_files(root)? {
            let content =
                std::fs::read_to_string(&path).map_err(|e| InkpostError::FileReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default();

            posts.push(Post::from_document(&stem, frontmatter::parse(&content)));
        }

        sort_newest_first(&mut posts);

        Ok(Self {
            root: root.to_path_buf(),
            posts,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All posts, newest-first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Look up a post by its slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// The featured post: the first explicitly marked one, else the most
    /// recently dated.
    pub fn featured(&self) -> Option<&Post> {
        self.posts
            .iter()
            .find(|post| post.featured)
            .or_else(|| self.posts.first())
    }

    /// The `limit` most recent posts.
    pub fn recent(&self, limit: usize) -> &[Post] {
        &self.posts[..limit.min(self.posts.len())]
    }

    /// Tags with occurrence counts, in first-seen order across the
    /// newest-first post list.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for post in &self.posts {
            for tag in &post.tags {
                match counts.iter_mut().find(|entry| entry.0 == *tag) {
                    Some(entry) => entry.1 += 1,
                    None => counts.push((tag.clone(), 1)),
                }
            }
        }
        counts
    }
}

/// Discover content files under the root, in stable path order.
fn discover_content_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| InkpostError::ContentScanFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "md")
        {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// Order posts newest-first; undated posts sort last, ties keep
/// discovery order.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_key(|post| {
        std::cmp::Reverse(post.parsed_date().unwrap_or(DateTime::<Utc>::MIN_UTC))
    });
}
