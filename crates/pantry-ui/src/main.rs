//! Pantry - main entry point.
//!
//! Loads the config, seeds the recipe store, binds a recipe list to it and
//! prints the list for the requested mode.
//!
//! ```text
//! pantry [all | favorites | recents | collection:<name>]
//! ```

use std::sync::Arc;

use chrono::{Duration, Utc};
use pantry_core::{load_config, AppConfig, Item, ViewMode};
use pantry_store::RecipeStore;
use pantry_ui::{ModelOptions, RecipeListModel, StdoutRenderer};

// =============================================================================
// Configuration
// =============================================================================

/// Load config.toml, falling back to defaults on any error.
fn get_config() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {} - continuing with defaults", e);
            AppConfig::default()
        }
    }
}

/// Recipes shown when the config lists none.
fn sample_recipes() -> Vec<Item> {
    let now = Utc::now();
    vec![
        Item::new("Apple Pie")
            .with_favorite(true)
            .with_added_on(now - Duration::days(40))
            .in_collection("Desserts"),
        Item::new("Chicken Soup").with_added_on(now - Duration::days(3)),
        Item::new("Chocolate Chip Cookies")
            .with_favorite(true)
            .with_added_on(now - Duration::days(12))
            .in_collection("Desserts")
            .in_collection("Baking"),
        Item::new("Focaccia")
            .with_added_on(now - Duration::days(90))
            .in_collection("Baking"),
    ]
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = get_config();

    let mode = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<ViewMode>() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::error!("{}", e);
                eprintln!("Error: {}", e);
                eprintln!("Usage: pantry [all | favorites | recents | collection:<name>]");
                std::process::exit(1);
            }
        },
        None => config.default_mode.clone(),
    };

    let seeds = if config.recipes.is_empty() {
        tracing::info!("No recipes configured - using samples");
        sample_recipes()
    } else {
        config.seed_items(Utc::now())
    };

    let store = Arc::new(RecipeStore::with_items(seeds));
    tracing::info!("Store seeded with {} recipes", store.len());

    println!("{}", mode.title());
    let mut model = RecipeListModel::new(
        store,
        Arc::new(StdoutRenderer),
        ModelOptions {
            initial_mode: mode,
            filter: config.view_filter(),
            ..ModelOptions::default()
        },
    );

    let collections = model.collections();
    if !collections.is_empty() {
        tracing::info!("Collections: {}", collections.join(", "));
    }

    model.teardown();
}
