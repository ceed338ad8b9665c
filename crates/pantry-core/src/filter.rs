//! View filtering.
//!
//! Given the full item collection and the active [`ViewMode`], produce the
//! ordered subsequence of items to display. Filtering only ever removes items;
//! it never reorders them.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

use crate::item::Item;
use crate::view_mode::ViewMode;

/// Default lookback window for [`ViewMode::Recents`].
pub const DEFAULT_RECENTS_DAYS: u32 = 30;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant, or `None` if the clock cannot be read.
    fn now(&self) -> Option<DateTime<Utc>>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<DateTime<Utc>> {
        Some(Utc::now())
    }
}

/// Resolve a possibly-unknown instant, falling back to the current time.
pub fn resolve_now(now: Option<DateTime<Utc>>) -> DateTime<Utc> {
    now.unwrap_or_else(|| {
        tracing::warn!("Clock unavailable, filtering against the current instant");
        Utc::now()
    })
}

/// Filter parameters shared by every filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewFilter {
    recents_window: Duration,
}

impl ViewFilter {
    /// Create a filter with the given recents window.
    pub fn new(recents_window: Duration) -> Self {
        Self { recents_window }
    }

    /// Create a filter whose recents window spans `days` days.
    pub fn with_recents_days(days: u32) -> Self {
        Self::new(Duration::days(i64::from(days)))
    }

    /// The recents lookback window.
    pub fn recents_window(&self) -> Duration {
        self.recents_window
    }

    /// Compute the visible items for `mode` at instant `now`.
    pub fn compute_visible(
        &self,
        items: &[Item],
        mode: &ViewMode,
        now: DateTime<Utc>,
    ) -> Vec<Item> {
        match mode {
            ViewMode::All | ViewMode::Collection { name: None } => items.to_vec(),
            ViewMode::Favorites => items.iter().filter(|i| i.favorite).cloned().collect(),
            ViewMode::Recents => {
                let cutoff = now
                    .checked_sub_signed(self.recents_window)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                items
                    .iter()
                    .filter(|i| i.added_on > cutoff)
                    .cloned()
                    .collect()
            }
            ViewMode::Collection { name: Some(name) } => items
                .iter()
                .filter(|i| i.is_in_collection(name))
                .cloned()
                .collect(),
        }
    }
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self::with_recents_days(DEFAULT_RECENTS_DAYS)
    }
}

/// Compute the visible items with the default recents window.
pub fn compute_visible(items: &[Item], mode: &ViewMode, now: DateTime<Utc>) -> Vec<Item> {
    ViewFilter::default().compute_visible(items, mode, now)
}

/// Sorted, de-duplicated collection names present in `items`.
pub fn collection_names(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|i| i.collections.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
