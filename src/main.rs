//! Inkpost - Markdown blog content engine
//!
//! A command line tool for loading a directory of Markdown content files,
//! decoding their frontmatter metadata, and resolving stable tag colors
//! from per-document overrides, a central registry, and automatic
//! round-robin assignment.

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod content;
mod error;
mod frontmatter;
mod tags;

use cli::{Cli, Commands};
use error::{InkpostError, Result};

/// Check that the content directory exists before dispatching
fn check_content_dir(content_dir: Option<&PathBuf>) -> Result<()> {
    let path = match content_dir {
        Some(path) => path.clone(),
        None => PathBuf::from("posts"),
    };

    if !path.is_dir() {
        return Err(InkpostError::ContentDirNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Check the content directory for commands that read it
    // Version and completions can be run anywhere
    let needs_content_dir = matches!(
        cli.command,
        Commands::List(_) | Commands::Show(_) | Commands::Tags(_) | Commands::Featured
    );

    if needs_content_dir {
        if let Err(e) = check_content_dir(cli.content_dir.as_ref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(cli.content_dir, cli.tag_config, args),
        Commands::Show(args) => commands::show::run(cli.content_dir, cli.tag_config, args),
        Commands::Tags(args) => commands::tags::run(cli.content_dir, cli.tag_config, args),
        Commands::Featured => commands::featured::run(cli.content_dir, cli.tag_config),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
