//! Tag color subsystem
//!
//! This module handles:
//! - The fixed light/dark color palette
//! - The central tag registry (tags.yaml / tags.json)
//! - Three-tier tag color resolution with memoization

pub mod palette;
pub mod registry;
pub mod resolver;

pub use palette::{ColorScheme, PALETTE, PaletteColor};
pub use registry::{TagDefinition, TagRegistry};
pub use resolver::{TagColorResolver, TagOverrides};
