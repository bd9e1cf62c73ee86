//! Show command implementation
//!
//! Prints a single post's metadata header and Markdown body, with each
//! tag's resolved color.

use console::Style;

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::content::Post;
use crate::error::{InkpostError, Result};
use crate::tags::TagColorResolver;

use super::helpers;

/// Run show command
pub fn run(
    content_dir: Option<PathBuf>,
    tag_config: Option<PathBuf>,
    args: ShowArgs,
) -> Result<()> {
    let content_dir = helpers::content_dir_path(content_dir);
    let library = helpers::load_library(&content_dir)?;
    let resolver = helpers::load_resolver(&content_dir, tag_config.as_deref())?;

    let post = library
        .by_slug(&args.slug)
        .ok_or_else(|| InkpostError::PostNotFound {
            slug: args.slug.clone(),
        })?;

    display_post(post, &resolver, args.meta_only);

    Ok(())
}

fn display_post(post: &Post, resolver: &TagColorResolver, meta_only: bool) {
    println!("{}", Style::new().bold().yellow().apply_to(&post.title));
    println!(
        "{} {} {}",
        Style::new().dim().apply_to(&post.date),
        Style::new().dim().apply_to("•"),
        Style::new().dim().apply_to(&post.read_time)
    );
    if post.featured {
        println!("{}", Style::new().green().apply_to("Featured post"));
    }
    if !post.excerpt.is_empty() {
        println!();
        println!("{}", post.excerpt);
    }
    if !post.tags.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("Tags:"));
        for tag in &post.tags {
            let color = resolver.resolve(tag, Some(&post.tag_overrides));
            println!(
                "  {} ({})",
                Style::new().cyan().apply_to(tag),
                Style::new().dim().apply_to(color.name())
            );
        }
    }

    if !meta_only && !post.body.is_empty() {
        println!();
        println!("{}", post.body);
    }
}
