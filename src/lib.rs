//! # Cardforge
//!
//! Renders baseball trading card images from built-in templates, and
//! generates the procedural textures those templates are painted with.

#[cfg(feature = "cli")]
pub mod cli;
pub mod data;
pub mod error;
pub mod image;
pub mod layer;
#[cfg(feature = "cli")]
pub mod logs;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod template;
pub mod text;
pub mod texture;

pub use error::{Error, Result};
