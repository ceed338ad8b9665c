//! Delete confirmation.

use pantry_core::{Item, ItemId};
use pantry_store::ItemStore;

/// A pending request to delete a recipe, awaiting the user's answer.
///
/// Carries the text for the confirmation dialog. Nothing is deleted until
/// [`DeletePrompt::confirm`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a DeletePrompt does nothing until confirmed"]
pub struct DeletePrompt {
    item_id: ItemId,
    recipe_title: String,
}

impl DeletePrompt {
    pub const CONFIRM_LABEL: &'static str = "Delete";
    pub const CANCEL_LABEL: &'static str = "Cancel";

    /// Prompt for deleting `item`.
    pub fn for_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            recipe_title: item.title.clone(),
        }
    }

    /// The recipe to delete.
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Dialog title.
    pub fn title(&self) -> String {
        format!("Delete \u{201c}{}\u{201d}?", self.recipe_title)
    }

    /// Dialog body.
    pub fn message(&self) -> &'static str {
        "This recipe will be permanently removed."
    }

    /// Delete the recipe. Returns `false` if it was already gone.
    pub fn confirm(self, store: &dyn ItemStore) -> bool {
        let deleted = store.delete(&self.item_id);
        if deleted {
            tracing::info!("Deleted recipe '{}'", self.recipe_title);
        } else {
            tracing::warn!("Recipe '{}' was already deleted", self.recipe_title);
        }
        deleted
    }

    /// Dismiss without deleting.
    pub fn cancel(self) {
        tracing::debug!("Delete of '{}' cancelled", self.recipe_title);
    }
}
