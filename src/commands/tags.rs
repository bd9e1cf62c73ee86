//! Tags command implementation
//!
//! Aggregates tags across all posts and shows each tag's occurrence
//! count and resolved color. Detailed mode adds registry descriptions
//! and the CSS class strings.

use console::Style;

use std::path::PathBuf;

use crate::cli::TagsArgs;
use crate::error::Result;

use super::helpers;

/// Run tags command
pub fn run(
    content_dir: Option<PathBuf>,
    tag_config: Option<PathBuf>,
    args: TagsArgs,
) -> Result<()> {
    let content_dir = helpers::content_dir_path(content_dir);
    let library = helpers::load_library(&content_dir)?;
    let resolver = helpers::load_resolver(&content_dir, tag_config.as_deref())?;

    let counts = library.tag_counts();
    if counts.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    let tags_label = if counts.len() == 1 { "tag" } else { "tags" };
    println!("Tags ({} {}):", counts.len(), tags_label);
    println!();

    for (tag, count) in &counts {
        let color = resolver.resolve(tag, None);
        let posts_label = if *count == 1 { "post" } else { "posts" };
        println!(
            "  {} ({} {}) {}",
            Style::new().bold().cyan().apply_to(tag),
            count,
            posts_label,
            Style::new().dim().apply_to(color.name())
        );

        if args.detailed {
            if let Some(definition) = resolver.registry().get(tag) {
                if let Some(ref description) = definition.description {
                    println!("    {} {}", Style::new().bold().apply_to("About:"), description);
                }
            }
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Classes:"),
                Style::new().dim().apply_to(resolver.classes(tag, None))
            );
        }
    }

    if args.detailed {
        let stats = resolver.stats();
        println!();
        println!(
            "{} {} configured, {} auto-assigned",
            Style::new().bold().apply_to("Palette:"),
            resolver.registry().tags.len(),
            stats.auto_assigned
        );
    }

    Ok(())
}
