//! # Document Layer
//!
//! The controller never touches a page directly. Everything it needs from the
//! surrounding document, and everything it writes back, goes through the
//! [`Document`] trait:
//!
//! - the ordered item collection and the category controls (read once)
//! - per-item visibility writes, the load-more control, the active category
//!
//! ## Implementations
//!
//! - [`fs::FileDocument`]: a JSON page manifest on disk. Visibility writes are
//!   kept in memory and never written back.
//! - [`memory::InMemoryDocument`]: for tests, plus the `memory::fixtures`
//!   builders.
//!
//! ## Page Manifest
//!
//! ```text
//! {
//!   "categories": [ { "tag": "food", "label": "Food & Dining" }, ... ],
//!   "posts": [ { "category": "food", "title": "...", "description": "..." }, ... ]
//! }
//! ```
//!
//! `categories` is optional; when absent, categories are derived from the
//! posts in first-seen order.

use crate::error::{BlogdexError, Result};
use crate::model::{
    ALL_CATEGORY, Category, DisplayItem, Item, ItemRecord, Visibility, VisibilityChange,
};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Collection provider and rendering sink for one page.
pub trait Document {
    /// The items in page order.
    fn load_items(&self) -> Result<Vec<ItemRecord>>;

    /// The selectable categories, in control order. May be empty.
    fn load_categories(&self) -> Result<Vec<Category>>;

    /// Reflect visibility writes.
    fn apply_visibility(&mut self, changes: &[VisibilityChange]) -> Result<()>;

    /// Show or hide the load-more control.
    fn set_load_more_visible(&mut self, visible: bool) -> Result<()>;

    /// Mark the category control for `tag` as active.
    fn set_active_category(&mut self, tag: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub categories: Vec<Category>,
    pub posts: Vec<ItemRecord>,
}

/// What a renderer currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub visibility: Vec<Visibility>,
    pub load_more_visible: bool,
    pub active_category: String,
}

impl RenderedPage {
    /// Everything starts hidden until the controller paints the first page.
    pub fn new(item_count: usize) -> Self {
        Self {
            visibility: vec![Visibility::Hidden; item_count],
            load_more_visible: false,
            active_category: ALL_CATEGORY.to_string(),
        }
    }

    pub fn apply(&mut self, changes: &[VisibilityChange]) -> Result<()> {
        for change in changes {
            let slot = self.visibility.get_mut(change.index).ok_or_else(|| {
                BlogdexError::Document(format!("No item at index {}", change.index))
            })?;
            *slot = change.visibility;
        }
        Ok(())
    }

    pub fn visible_indexes(&self) -> Vec<usize> {
        self.visibility
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == Visibility::Visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// Joins the visible slots with the page's records, in page order.
    pub fn shown(&self, records: &[ItemRecord]) -> Vec<DisplayItem> {
        self.visible_indexes()
            .into_iter()
            .filter_map(|index| {
                records.get(index).map(|record| DisplayItem {
                    position: index + 1,
                    item: Item::new(record.clone(), Visibility::Visible),
                })
            })
            .collect()
    }
}
