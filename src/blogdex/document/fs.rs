use super::{Document, PageManifest, RenderedPage};
use crate::error::{BlogdexError, Result};
use crate::model::{Category, DisplayItem, ItemRecord, VisibilityChange};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A page loaded from a JSON manifest on disk.
///
/// Rendering state lives in memory; the manifest is never written back.
pub struct FileDocument {
    manifest: PageManifest,
    rendered: RenderedPage,
}

impl FileDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BlogdexError::Document(format!("Cannot read page {}: {}", path.display(), e))
        })?;
        let manifest: PageManifest =
            serde_json::from_str(&content).map_err(BlogdexError::Serialization)?;
        debug!(
            path = %path.display(),
            posts = manifest.posts.len(),
            categories = manifest.categories.len(),
            "loaded page manifest"
        );

        let rendered = RenderedPage::new(manifest.posts.len());
        Ok(Self { manifest, rendered })
    }

    pub fn rendered(&self) -> &RenderedPage {
        &self.rendered
    }

    /// The posts the page currently shows, as last rendered.
    pub fn shown_posts(&self) -> Vec<DisplayItem> {
        self.rendered.shown(&self.manifest.posts)
    }
}

impl Document for FileDocument {
    fn load_items(&self) -> Result<Vec<ItemRecord>> {
        Ok(self.manifest.posts.clone())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.manifest.categories.clone())
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
