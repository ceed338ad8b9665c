//! Display model for the Pantry recipe list.
//!
//! This crate provides:
//! - `RecipeListModel`, the list bound to a store with selection preservation
//! - `DeletePrompt` for confirming deletions
//! - The `Renderer` seam and a stdout renderer

pub mod model;
pub mod render;

// Re-export commonly used types
pub use model::{DeletePrompt, ModelOptions, RecipeListModel};
pub use pantry_core::ViewMode;
pub use render::{format_rows, Renderer, StdoutRenderer};
