//! Selection tracking across filter changes.
//!
//! The selected identity outlives its visibility: when the selected item is
//! filtered out, the resolved position is `None` but the identity stays in
//! [`SelectionState`], so the item is selected again once it reappears.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::ViewFilter;
use crate::item::{Item, ItemId};
use crate::view_mode::ViewMode;

/// A selection that is visible, with its position in the visible items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSelection {
    pub id: ItemId,
    pub index: usize,
}

/// Locate `previous` in `visible`.
///
/// Comparison is by identity only. If the identity occurs more than once the
/// first occurrence wins.
pub fn reconcile(previous: Option<&ItemId>, visible: &[Item]) -> Option<ResolvedSelection> {
    let id = previous?;
    visible
        .iter()
        .position(|item| item.id == *id)
        .map(|index| ResolvedSelection { id: *id, index })
}

/// Filter `items` with `new_item` appended, and select the new item.
///
/// The new item resolves to a position only if it passes the mode's filter.
pub fn apply_insertion(
    filter: &ViewFilter,
    items: &[Item],
    new_item: Item,
    mode: &ViewMode,
    now: DateTime<Utc>,
) -> (Vec<Item>, Option<ResolvedSelection>) {
    let id = new_item.id;
    let mut all = Vec::with_capacity(items.len() + 1);
    all.extend_from_slice(items);
    all.push(new_item);

    let visible = filter.compute_visible(&all, mode, now);
    let resolved = reconcile(Some(&id), &visible);
    (visible, resolved)
}

/// The last item the user picked, owned by the display layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_id: Option<ItemId>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item by id.
    pub fn select(&mut self, id: ItemId) {
        self.selected_id = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// The selected id, if any. May refer to an item that is not visible.
    pub fn id(&self) -> Option<&ItemId> {
        self.selected_id.as_ref()
    }

    /// Check if an item is selected.
    pub fn has_selection(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Resolve the selection against the visible items.
    pub fn resolve(&self, visible: &[Item]) -> Option<ResolvedSelection> {
        reconcile(self.id(), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::compute_visible;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-17T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_reconcile_none() {
        let visible = vec![Item::new("A"), Item::new("B")];
        assert_eq!(reconcile(None, &visible), None);
        assert_eq!(reconcile(None, &[]), None);
    }

    #[test]
    fn test_reconcile_found() {
        let visible = vec![Item::new("A"), Item::new("B"), Item::new("C")];
        let id = visible[2].id;
        assert_eq!(
            reconcile(Some(&id), &visible),
            Some(ResolvedSelection { id, index: 2 })
        );
    }

    #[test]
    fn test_reconcile_missing() {
        let visible = vec![Item::new("A")];
        assert_eq!(reconcile(Some(&ItemId::new()), &visible), None);
    }

    #[test]
    fn test_reconcile_first_duplicate_wins() {
        let a = Item::new("A");
        let visible = vec![Item::new("X"), a.clone(), a.clone()];
        assert_eq!(reconcile(Some(&a.id), &visible).map(|r| r.index), Some(1));
    }

    #[test]
    fn test_reconcile_ignores_content() {
        let a = Item::new("Same").with_favorite(true);
        let twin = Item {
            id: ItemId::new(),
            ..a.clone()
        };
        assert_eq!(reconcile(Some(&a.id), &[twin]), None);
    }

    #[test]
    fn test_hidden_selection_is_remembered() {
        let a = Item::new("A");
        let b = Item::new("B").with_favorite(true);
        let c = Item::new("C").with_favorite(true);
        let items = vec![a.clone(), b, c];

        let mut selection = SelectionState::new();
        selection.select(a.id);

        let favorites = compute_visible(&items, &ViewMode::Favorites, now());
        assert_eq!(favorites.len(), 2);
        assert_eq!(selection.resolve(&favorites), None);
        assert_eq!(selection.id(), Some(&a.id));

        let all = compute_visible(&items, &ViewMode::All, now());
        assert_eq!(
            selection.resolve(&all),
            Some(ResolvedSelection { id: a.id, index: 0 })
        );
    }

    #[test]
    fn test_reappears_at_new_position() {
        let a = Item::new("A");
        let b = Item::new("B");
        let c = Item::new("C");

        let first = vec![a.clone(), b.clone(), c.clone()];
        assert_eq!(reconcile(Some(&c.id), &first).map(|r| r.index), Some(2));

        assert_eq!(reconcile(Some(&c.id), &[a.clone(), b.clone()]), None);

        let later = vec![c.clone(), a];
        assert_eq!(reconcile(Some(&c.id), &later).map(|r| r.index), Some(0));
    }

    #[test]
    fn test_insertion_selects_visible_item() {
        let items = vec![Item::new("A"), Item::new("B")];
        let d = Item::new("D").with_favorite(true);
        let d_id = d.id;

        let (visible, resolved) = apply_insertion(
            &ViewFilter::default(),
            &items,
            d,
            &ViewMode::Favorites,
            now(),
        );

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, d_id);
        assert_eq!(resolved, Some(ResolvedSelection { id: d_id, index: 0 }));
    }

    #[test]
    fn test_insertion_outside_mode_resolves_none() {
        let items = vec![Item::new("A").with_favorite(true)];
        let old = Item::new("Old").with_added_on(now() - Duration::days(45));

        let (visible, resolved) = apply_insertion(
            &ViewFilter::default(),
            &items,
            old,
            &ViewMode::Recents,
            now(),
        );

        assert_eq!(visible.len(), 1);
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_insertion_under_all_is_last() {
        let items = vec![Item::new("A"), Item::new("B")];
        let e = Item::new("E");
        let e_id = e.id;

        let (visible, resolved) =
            apply_insertion(&ViewFilter::default(), &items, e, &ViewMode::All, now());

        assert_eq!(visible.len(), 3);
        assert_eq!(resolved, Some(ResolvedSelection { id: e_id, index: 2 }));
    }

    #[test]
    fn test_selection_state_clear() {
        let mut selection = SelectionState::new();
        assert!(!selection.has_selection());

        selection.select(ItemId::new());
        assert!(selection.has_selection());

        selection.clear();
        assert!(!selection.has_selection());
        assert_eq!(selection.resolve(&[Item::new("A")]), None);
    }
}
