use super::{Document, RenderedPage};
use crate::error::Result;
use crate::model::{Category, ItemRecord, VisibilityChange};

/// In-memory document for testing and development.
#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    items: Vec<ItemRecord>,
    categories: Vec<Category>,
    rendered: RenderedPage,
}

impl InMemoryDocument {
    pub fn new(items: Vec<ItemRecord>, categories: Vec<Category>) -> Self {
        let rendered = RenderedPage::new(items.len());
        Self {
            items,
            categories,
            rendered,
        }
    }

    pub fn rendered(&self) -> &RenderedPage {
        &self.rendered
    }
}

impl Document for InMemoryDocument {
    fn load_items(&self) -> Result<Vec<ItemRecord>> {
        Ok(self.items.clone())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn apply_visibility(&mut self, changes: &[VisibilityChange]) -> Result<()> {
        self.rendered.apply(changes)
    }

    fn set_load_more_visible(&mut self, visible: bool) -> Result<()> {
        self.rendered.load_more_visible = visible;
        Ok(())
    }

    fn set_active_category(&mut self, tag: &str) -> Result<()> {
        self.rendered.active_category = tag.to_string();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::{CmdResult, initialize};
    use crate::controller::VisibilityController;
    use crate::model::CategoryRegistry;

    #[derive(Debug, Default)]
    pub struct PageFixture {
        pub categories: Vec<Category>,
        pub posts: Vec<ItemRecord>,
    }

    impl PageFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_category(mut self, tag: &str, label: &str) -> Self {
            self.categories.push(Category::new(tag, label));
            self
        }

        pub fn with_post(mut self, category: &str, title: &str, description: &str) -> Self {
            self.posts
                .push(ItemRecord::new(category, title, description));
            self
        }

        /// Adds `count` posts titled "Post N", numbered across the whole page.
        pub fn with_posts(mut self, count: usize, category: &str) -> Self {
            for _ in 0..count {
                let n = self.posts.len() + 1;
                self.posts.push(ItemRecord::new(
                    category,
                    format!("Post {}", n),
                    format!("Notes from {}", category),
                ));
            }
            self
        }

        pub fn registry(&self) -> CategoryRegistry {
            CategoryRegistry::declared_or_derived(self.categories.clone(), &self.posts)
        }

        pub fn initialize(self, page_size: usize) -> (VisibilityController, CmdResult) {
            let registry = self.registry();
            initialize::run(self.posts, registry, page_size)
        }

        pub fn document(self) -> InMemoryDocument {
            InMemoryDocument::new(self.posts, self.categories)
        }
    }
}
