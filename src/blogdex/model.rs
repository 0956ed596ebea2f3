use serde::{Deserialize, Serialize};

/// Sentinel category tag meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

const ALL_CATEGORY_LABEL: &str = "All Posts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    Hidden,
    /// Present in the document but not yet disclosed by pagination.
    PendingReveal,
}

/// The mutually exclusive regime currently governing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Browsing,
    Filtered,
    Searched,
}

/// An item as supplied by the document, before the controller owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ItemRecord {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub record: ItemRecord,
    pub visibility: Visibility,
}

impl Item {
    pub fn new(record: ItemRecord, visibility: Visibility) -> Self {
        Self { record, visibility }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

/// A single visibility write for the rendering adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityChange {
    /// Zero-based index into the item collection.
    pub index: usize,
    pub visibility: Visibility,
}

/// A visible item together with its 1-based position in the collection.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub position: usize,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub tag: String,
    pub label: String,
}

impl Category {
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.tag == ALL_CATEGORY
    }
}

/// The ordered, closed set of selectable categories.
///
/// The `all` sentinel is always present and always first, so label lookups
/// see it in the same place the category controls show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut all = None;
        let mut rest = Vec::with_capacity(categories.len());
        for category in categories {
            if category.is_all() {
                if all.is_none() {
                    all = Some(category);
                }
            } else if !rest.iter().any(|c: &Category| c.tag == category.tag) {
                rest.push(category);
            }
        }

        let mut ordered = Vec::with_capacity(rest.len() + 1);
        ordered.push(all.unwrap_or_else(|| Category::new(ALL_CATEGORY, ALL_CATEGORY_LABEL)));
        ordered.extend(rest);
        Self {
            categories: ordered,
        }
    }

    /// Builds a registry from the tags used by the items, in first-seen order.
    /// Labels are the tags themselves.
    pub fn from_records(records: &[ItemRecord]) -> Self {
        let categories = records
            .iter()
            .map(|r| Category::new(r.category.clone(), r.category.clone()))
            .collect();
        Self::new(categories)
    }

    /// Uses the declared categories, or derives them from the items when the
    /// document declares none.
    pub fn declared_or_derived(declared: Vec<Category>, records: &[ItemRecord]) -> Self {
        if declared.is_empty() {
            Self::from_records(records)
        } else {
            Self::new(declared)
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, tag: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.tag == tag)
    }

    /// First category whose label contains `needle`, ignoring case.
    pub fn find_by_label(&self, needle: &str) -> Option<&Category> {
        let needle = needle.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.label.to_lowercase().contains(&needle))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_always_starts_with_all() {
        let registry = CategoryRegistry::new(vec![
            Category::new("food", "Food"),
            Category::new("all", "Everything"),
        ]);
        let tags: Vec<_> = registry.categories().iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["all", "food"]);
        assert_eq!(registry.categories()[0].label, "Everything");
    }

    #[test]
    fn registry_inserts_default_all() {
        let registry = CategoryRegistry::new(vec![Category::new("food", "Food")]);
        assert_eq!(registry.categories()[0], Category::new("all", "All Posts"));
    }

    #[test]
    fn registry_from_records_dedupes_in_order() {
        let records = vec![
            ItemRecord::new("travel", "A", ""),
            ItemRecord::new("food", "B", ""),
            ItemRecord::new("travel", "C", ""),
        ];
        let registry = CategoryRegistry::from_records(&records);
        let tags: Vec<_> = registry.categories().iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["all", "travel", "food"]);
    }

    #[test]
    fn find_by_label_is_case_insensitive_substring() {
        let registry = CategoryRegistry::new(vec![
            Category::new("food", "Food & Dining"),
            Category::new("travel", "Travel Guides"),
        ]);
        assert_eq!(registry.find_by_label("dining").unwrap().tag, "food");
        assert_eq!(registry.find_by_label("GUIDE").unwrap().tag, "travel");
        assert!(registry.find_by_label("nightlife").is_none());
    }
}
