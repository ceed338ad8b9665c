//! Rendering seam.
//!
//! The list model never draws anything itself. It hands every recomputed
//! result to a [`Renderer`], which owns diffing, animation and translating the
//! selected index into on-screen selection.

use pantry_core::Item;

/// Receives each recomputed list.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync {
    /// Show `visible`, with the row at `selected_index` selected.
    ///
    /// Called while the model's state is locked; must not call back into the
    /// model.
    fn render(&self, visible: &[Item], selected_index: Option<usize>);
}

/// Renderer that prints the list to stdout.
#[derive(Debug, Default)]
pub struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn render(&self, visible: &[Item], selected_index: Option<usize>) {
        tracing::debug!(
            "Rendering {} recipes, selected: {:?}",
            visible.len(),
            selected_index
        );
        for line in format_rows(visible, selected_index) {
            println!("{}", line);
        }
    }
}

/// Format one text row per item, marking the selected one.
pub fn format_rows(visible: &[Item], selected_index: Option<usize>) -> Vec<String> {
    visible
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let cursor = if Some(index) == selected_index { ">" } else { " " };
            let star = if item.favorite { "*" } else { " " };
            format!("{} {} {}", cursor, star, item.title)
        })
        .collect()
}
