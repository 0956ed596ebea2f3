//! # Visibility Controller
//!
//! The controller owns the fixed item collection, the category registry and
//! the small amount of state that decides which items are visible:
//!
//! - `active_category`: the selected category control (`"all"` when none)
//! - `reveal_cursor`: how many items pagination has disclosed so far
//! - `mode`: which of Browsing, Filtered or Searched governs visibility
//!
//! A controller only comes into existence through
//! [`commands::initialize`](crate::commands::initialize). Every other
//! transition lives in `commands/*.rs` and reports the visibility writes it
//! made as [`VisibilityChange`] entries, so a renderer can mirror them
//! without re-reading the whole collection.
//!
//! ## Browsing View
//!
//! Pagination only discloses items in collection order, so in Browsing mode
//! the visible items are always the first `reveal_cursor` items and the rest
//! are `PendingReveal`. Leaving a filter or a search restores exactly that
//! view. Once the cursor reaches the item count the load-more control stays
//! hidden for the rest of the session.

use crate::model::{
    ALL_CATEGORY, CategoryRegistry, DisplayItem, Item, Mode, Visibility, VisibilityChange,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    pub active_category: String,
    pub reveal_cursor: usize,
    pub mode: Mode,
    /// Set once the startup location query has been consumed.
    pub location_applied: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            reveal_cursor: 0,
            mode: Mode::Browsing,
            location_applied: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityController {
    items: Vec<Item>,
    registry: CategoryRegistry,
    state: ControllerState,
}

impl VisibilityController {
    pub(crate) fn from_parts(
        items: Vec<Item>,
        registry: CategoryRegistry,
        state: ControllerState,
    ) -> Self {
        Self {
            items,
            registry,
            state,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn active_category(&self) -> &str {
        &self.state.active_category
    }

    pub fn reveal_cursor(&self) -> usize {
        self.state.reveal_cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_visible()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.visibility == Visibility::PendingReveal)
            .count()
    }

    /// True once pagination has disclosed every item.
    pub fn is_exhausted(&self) -> bool {
        self.state.reveal_cursor >= self.items.len()
    }

    /// Whether the "load more" control should currently be shown.
    pub fn load_more_visible(&self) -> bool {
        self.state.mode == Mode::Browsing && !self.is_exhausted()
    }

    pub fn visible_items(&self) -> Vec<DisplayItem> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_visible())
            .map(|(i, item)| DisplayItem {
                position: i + 1,
                item: item.clone(),
            })
            .collect()
    }

    pub(crate) fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    /// Writes one item's visibility, recording a change only if it differs.
    pub(crate) fn set_visibility(
        &mut self,
        index: usize,
        visibility: Visibility,
        changes: &mut Vec<VisibilityChange>,
    ) {
        let item = &mut self.items[index];
        if item.visibility != visibility {
            item.visibility = visibility;
            changes.push(VisibilityChange { index, visibility });
        }
    }

    /// Returns to Browsing with the reveal-cursor-governed view.
    pub(crate) fn restore_browsing(&mut self, changes: &mut Vec<VisibilityChange>) {
        let cursor = self.state.reveal_cursor;
        for index in 0..self.items.len() {
            let visibility = if index < cursor {
                Visibility::Visible
            } else {
                Visibility::PendingReveal
            };
            self.set_visibility(index, visibility, changes);
        }
        self.state.mode = Mode::Browsing;
        self.state.active_category = ALL_CATEGORY.to_string();
    }
}
