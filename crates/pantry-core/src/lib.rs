//! Core types for the Pantry recipe list.
//!
//! This crate contains the pure logic shared by all Pantry crates:
//! - Item and ItemId types
//! - View modes and view filtering
//! - Selection tracking across filter changes
//! - Configuration types
//! - Error types

mod config;
mod error;
mod filter;
mod item;
mod selection;
mod view_mode;

pub use config::{
    config_dir, config_path, load_config, load_config_from, AppConfig, RecentsConfig, SeedRecipe,
};
pub use error::{ConfigError, ModeParseError};
pub use filter::{
    collection_names, compute_visible, resolve_now, Clock, SystemClock, ViewFilter,
    DEFAULT_RECENTS_DAYS,
};
pub use item::{Item, ItemId};
pub use selection::{apply_insertion, reconcile, ResolvedSelection, SelectionState};
pub use view_mode::ViewMode;
