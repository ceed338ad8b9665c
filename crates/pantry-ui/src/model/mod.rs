//! State model for the Pantry recipe list.
//!
//! This module contains the list model and the delete confirmation.
//! Nothing here draws; rendering goes through the `Renderer` seam.

mod delete_prompt;
mod state;

pub use delete_prompt::DeletePrompt;
pub use state::{ModelOptions, RecipeListModel};
