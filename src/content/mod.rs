//! Content module - post models and the content directory loader

pub mod library;
pub mod post;

pub use library::PostLibrary;
pub use post::Post;
