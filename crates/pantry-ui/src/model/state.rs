//! Recipe list model.
//!
//! The model is the display-side owner of the active view mode and of the
//! user's last selection. It subscribes to the store, recomputes the visible
//! list from scratch on every snapshot and every mode change, and hands the
//! result to a [`Renderer`].

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use pantry_core::{
    collection_names, resolve_now, Clock, Item, ItemId, ResolvedSelection, SelectionState,
    SystemClock, ViewFilter, ViewMode,
};
use pantry_store::{ItemStore, Snapshot, Subscription};

use crate::model::delete_prompt::DeletePrompt;
use crate::render::Renderer;

// =============================================================================
// Options
// =============================================================================

/// Dependencies and initial settings for a [`RecipeListModel`].
pub struct ModelOptions {
    /// Mode the list opens in.
    pub initial_mode: ViewMode,

    /// Filter parameters, including the recents window.
    pub filter: ViewFilter,

    /// Source of the current instant for the recents filter.
    pub clock: Arc<dyn Clock>,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            initial_mode: ViewMode::default(),
            filter: ViewFilter::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

// =============================================================================
// List State
// =============================================================================

/// Everything the model recomputes from.
struct ListState {
    items: Snapshot,
    mode: ViewMode,
    filter: ViewFilter,
    clock: Arc<dyn Clock>,
    selection: SelectionState,
    visible: Vec<Item>,
    resolved: Option<ResolvedSelection>,
    renderer: Arc<dyn Renderer>,
}

impl ListState {
    /// Recompute the visible list and selection, then render.
    fn refresh(&mut self) {
        let now = resolve_now(self.clock.now());
        self.visible = self.filter.compute_visible(&self.items, &self.mode, now);
        self.resolved = self.selection.resolve(&self.visible);
        tracing::debug!(
            "Recomputed {} mode: {} of {} visible, selection at {:?}",
            self.mode,
            self.visible.len(),
            self.items.len(),
            self.resolved.map(|r| r.index)
        );
        self.renderer
            .render(&self.visible, self.resolved.map(|r| r.index));
    }
}

// =============================================================================
// Recipe List Model
// =============================================================================

/// The recipe list, bound to a store.
///
/// Constructed with its dependencies injected and torn down explicitly with
/// [`RecipeListModel::teardown`]. Dropping the model also unsubscribes.
///
/// The selected id is never cleared implicitly. When the selected recipe is
/// filtered out (or deleted) the list shows no selection, and the recipe is
/// selected again if it reappears.
pub struct RecipeListModel {
    store: Arc<dyn ItemStore>,
    state: Arc<Mutex<ListState>>,
    subscription: Option<Subscription>,
}

impl RecipeListModel {
    /// Bind a new list to `store`.
    ///
    /// Subscribing delivers the current snapshot, so `renderer` sees the
    /// initial list before this returns.
    pub fn new(
        store: Arc<dyn ItemStore>,
        renderer: Arc<dyn Renderer>,
        options: ModelOptions,
    ) -> Self {
        let state = Arc::new(Mutex::new(ListState {
            items: Snapshot::from(Vec::new()),
            mode: options.initial_mode,
            filter: options.filter,
            clock: options.clock,
            selection: SelectionState::new(),
            visible: Vec::new(),
            resolved: None,
            renderer,
        }));

        let subscription = store.subscribe(Self::on_snapshot(Arc::downgrade(&state)));
        tracing::debug!("Recipe list bound to store");

        Self {
            store,
            state,
            subscription: Some(subscription),
        }
    }

    fn on_snapshot(state: Weak<Mutex<ListState>>) -> pantry_store::SubscriberFn {
        Box::new(move |items: &[Item]| {
            if let Some(state) = state.upgrade() {
                let mut state = state.lock();
                state.items = Snapshot::from(items);
                state.refresh();
            }
        })
    }

    /// Unsubscribe from the store. The model keeps its last state.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            tracing::debug!("Recipe list unbound from store");
        }
    }

    /// Check if the model is still receiving store snapshots.
    pub fn is_bound(&self) -> bool {
        self.subscription
            .as_ref()
            .map(Subscription::is_active)
            .unwrap_or(false)
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// Switch the view mode and recompute.
    pub fn set_mode(&self, mode: ViewMode) {
        let mut state = self.state.lock();
        tracing::debug!("Mode {} -> {}", state.mode, mode);
        state.mode = mode;
        state.refresh();
    }

    /// The active view mode.
    pub fn mode(&self) -> ViewMode {
        self.state.lock().mode.clone()
    }

    /// Navigation title for the active mode.
    pub fn title(&self) -> String {
        self.state.lock().mode.title().to_string()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a recipe by id, visible or not.
    pub fn select(&self, id: ItemId) {
        let mut state = self.state.lock();
        state.selection.select(id);
        state.refresh();
    }

    /// Select the visible recipe at `index`.
    ///
    /// Returns the selected id, or `None` if `index` is out of range.
    pub fn select_index(&self, index: usize) -> Option<ItemId> {
        let mut state = self.state.lock();
        let id = state.visible.get(index)?.id;
        state.selection.select(id);
        state.refresh();
        Some(id)
    }

    /// Forget the selection.
    pub fn clear_selection(&self) {
        let mut state = self.state.lock();
        state.selection.clear();
        state.refresh();
    }

    /// The remembered selection, which may not be visible.
    pub fn selected_id(&self) -> Option<ItemId> {
        self.state.lock().selection.id().copied()
    }

    /// The selection's position in the visible list, if it is visible.
    pub fn resolved_selection(&self) -> Option<ResolvedSelection> {
        self.state.lock().resolved
    }

    // =========================================================================
    // Contents
    // =========================================================================

    /// The currently visible recipes.
    pub fn visible(&self) -> Vec<Item> {
        self.state.lock().visible.clone()
    }

    /// Collection names present in the store, sorted.
    pub fn collections(&self) -> Vec<String> {
        collection_names(&self.state.lock().items)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a recipe to the store and make it the selection.
    ///
    /// Returns the stored recipe. It is selected even if the active mode hides
    /// it; the list then shows no selection until it becomes visible.
    pub fn add_recipe(&self, recipe: Item) -> Item {
        // The store notifies synchronously and the callback locks the state.
        let stored = self.store.add(recipe);

        let mut state = self.state.lock();
        state.selection.select(stored.id);
        state.refresh();
        tracing::info!(
            "Added recipe '{}' ({}), visible at {:?}",
            stored.title,
            stored.id,
            state.resolved.map(|r| r.index)
        );
        stored
    }

    /// Build the confirmation for deleting a recipe.
    ///
    /// Returns `None` if the store has no recipe with that id.
    pub fn request_delete(&self, id: &ItemId) -> Option<DeletePrompt> {
        let state = self.state.lock();
        state
            .items
            .iter()
            .find(|item| item.id == *id)
            .map(DeletePrompt::for_item)
    }

    /// Confirm a delete prompt against this model's store.
    pub fn confirm_delete(&self, prompt: DeletePrompt) -> bool {
        prompt.confirm(self.store.as_ref())
    }
}

impl Drop for RecipeListModel {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Tests
// =============================================================================
