//! Featured command implementation
//!
//! Shows the featured post: the first explicitly marked one, or the
//! most recently dated post when none is marked.

use console::Style;

use std::path::PathBuf;

use crate::error::{InkpostError, Result};

use super::helpers;

/// Run featured command
pub fn run(content_dir: Option<PathBuf>, tag_config: Option<PathBuf>) -> Result<()> {
    let content_dir = helpers::content_dir_path(content_dir);
    let library = helpers::load_library(&content_dir)?;
    let resolver = helpers::load_resolver(&content_dir, tag_config.as_deref())?;

    let post = library.featured().ok_or_else(|| InkpostError::NoPosts {
        path: library.root().display().to_string(),
    })?;

    println!("  {}", Style::new().bold().yellow().apply_to(&post.slug));
    println!("    {} {}", Style::new().bold().apply_to("Title:"), post.title);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Date:"),
        Style::new().dim().apply_to(&post.date)
    );
    if !post.excerpt.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Excerpt:"),
            post.excerpt
        );
    }
    if !post.tags.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Tags:"));
        for tag in &post.tags {
            let color = resolver.resolve(tag, Some(&post.tag_overrides));
            println!(
                "      {} ({})",
                Style::new().cyan().apply_to(tag),
                Style::new().dim().apply_to(color.name())
            );
        }
    }

    Ok(())
}
