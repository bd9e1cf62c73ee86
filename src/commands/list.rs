//! List command implementation
//!
//! Lists posts newest-first with their slugs, dates, read times, and
//! tags. Detailed mode adds excerpts and per-tag resolved colors.

use console::Style;

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::content::Post;
use crate::error::Result;
use crate::tags::TagColorResolver;

use super::helpers;

/// Run list command
pub fn run(
    content_dir: Option<PathBuf>,
    tag_config: Option<PathBuf>,
    args: ListArgs,
) -> Result<()> {
    let content_dir = helpers::content_dir_path(content_dir);
    let library = helpers::load_library(&content_dir)?;

    if library.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    let resolver = helpers::load_resolver(&content_dir, tag_config.as_deref())?;

    let posts = match args.limit {
        Some(limit) => library.recent(limit),
        None => library.posts(),
    };

    let posts_label = if posts.len() == 1 { "post" } else { "posts" };
    println!("Posts ({} {}):", posts.len(), posts_label);
    println!();

    for post in posts {
        if args.detailed {
            display_post_detailed(post, &resolver);
        } else {
            display_post_simple(post);
        }
        println!();
    }

    Ok(())
}

/// Display post in simple format
fn display_post_simple(post: &Post) {
    print_post_heading(post);
    if !post.tags.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Tags:"),
            Style::new().cyan().apply_to(post.tags.join(", "))
        );
    }
}

/// Display post with excerpt and resolved tag colors
fn display_post_detailed(post: &Post, resolver: &TagColorResolver) {
    print_post_heading(post);
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
}

fn print_post_heading(post: &Post) {
    let featured = if post.featured {
        format!(" {}", Style::new().green().apply_to("(featured)"))
    } else {
        String::new()
    };
    println!(
        "  {}{}",
        Style::new().bold().yellow().apply_to(&post.slug),
        featured
    );
    println!("    {} {}", Style::new().bold().apply_to("Title:"), post.title);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Date:"),
        Style::new().dim().apply_to(&post.date)
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Read time:"),
        Style::new().dim().apply_to(&post.read_time)
    );
}
