//! Observable item store for the Pantry recipe list.
//!
//! This crate provides:
//! - The `ItemStore` trait the display layer binds to
//! - `RecipeStore`, an in-memory store where every mutation notifies
//! - Callback subscriptions with explicit cancellation
//! - A `watch` stream of the latest snapshot for async consumers

mod store;
mod subscription;

pub use store::{ItemStore, RecipeStore, Snapshot};
pub use subscription::{SubscriberFn, Subscription};

// Re-export pantry_core types for convenience
pub use pantry_core::{Item, ItemId};
