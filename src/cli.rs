//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inkpost - Markdown blog content engine
///
/// Load a directory of Markdown content files, inspect their decoded
/// frontmatter, and resolve stable tag colors.
#[derive(Parser, Debug)]
#[command(
    name = "inkpost",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Markdown blog content engine",
    long_about = "Inkpost loads a directory of Markdown content files, decodes their \
                  frontmatter metadata, assembles post view models, and resolves \
                  stable tag colors from per-document overrides, a central registry, \
                  and automatic round-robin assignment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  inkpost list\n    \
                  inkpost show my-first-post\n    \
                  inkpost tags --detailed\n    \
                  inkpost featured\n    \
                  inkpost -C content/posts list\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/inkpost/inkpost"
)]
pub struct Cli {
    /// Content directory holding .md files (defaults to ./posts)
    #[arg(long = "content-dir", short = 'C', global = true)]
    pub content_dir: Option<PathBuf>,

    /// Tag registry file (defaults to tags.yaml / tags.json in the content directory)
    #[arg(long, global = true)]
    pub tag_config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, newest first
    List(ListArgs),

    /// Show a single post by slug
    Show(ShowArgs),

    /// List tags with their resolved colors
    Tags(TagsArgs),

    /// Show the featured post
    Featured,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all posts:\n    inkpost list\n\n\
                  Show excerpts and tag colors:\n    inkpost list --detailed\n\n\
                  List the three most recent posts:\n    inkpost list --limit 3\n\n\
                  List posts from another directory:\n    inkpost -C content/posts list")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,

    /// Show only the N most recent posts
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a post:\n    inkpost show my-first-post\n\n\
                  Show only the metadata header:\n    inkpost show my-first-post --meta-only")]
pub struct ShowArgs {
    /// Post slug to show
    pub slug: String,

    /// Print the metadata header without the body
    #[arg(long)]
    pub meta_only: bool,
}

/// Arguments for the tags command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List tags with counts and colors:\n    inkpost tags\n\n\
                  Include descriptions and class strings:\n    inkpost tags --detailed")]
pub struct TagsArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    inkpost completions --shell bash > ~/.bash_completion.d/inkpost\n\n\
                  Generate zsh completions:\n    inkpost completions --shell zsh > ~/.zfunc/_inkpost\n\n\
                  Generate fish completions:\n    inkpost completions --shell fish > ~/.config/fish/completions/inkpost.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
