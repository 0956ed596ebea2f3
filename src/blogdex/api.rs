//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for page interaction, whatever drives it (the CLI session, a
//! test, a browser binding).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`VisibilityController`] built by `initialize`, so no state
//!   lives at module scope
//! - **Dispatches** each trigger to the matching command function
//! - **Renders**: pushes the visibility changes, the load-more control and
//!   the active category into the [`Document`] after every command
//!
//! Commands never see the document and the document never sees the
//! controller; this module is the only place the two meet.
//!
//! ## Generic Over Document
//!
//! `BlogdexApi<D: Document>` is generic over the page:
//! - Production: `BlogdexApi<FileDocument>`
//! - Testing: `BlogdexApi<InMemoryDocument>`

use crate::commands::{self, CmdResult};
use crate::config::BlogdexConfig;
use crate::controller::VisibilityController;
use crate::document::Document;
use crate::error::Result;
use crate::model::{Category, CategoryRegistry};
use tracing::debug;

pub struct BlogdexApi<D: Document> {
    document: D,
    controller: VisibilityController,
    batch_size: usize,
}

impl<D: Document> BlogdexApi<D> {
    /// Loads the page, shows the first `page_size` items and renders them.
    pub fn open(mut document: D, config: &BlogdexConfig) -> Result<Self> {
        config.validate()?;

        let records = document.load_items()?;
        let registry = CategoryRegistry::declared_or_derived(document.load_categories()?, &records);
        let (controller, result) = commands::initialize::run(records, registry, config.page_size);

        render(&mut document, &controller, &result)?;
        debug!(
            items = controller.len(),
            categories = controller.registry().categories().len(),
            "page opened"
        );

        Ok(Self {
            document,
            controller,
            batch_size: config.batch_size,
        })
    }

    pub fn set_category_filter(&mut self, category: &str) -> Result<CmdResult> {
        let result = commands::filter::run(&mut self.controller, category);
        self.render(result)
    }

    pub fn search(&mut self, query: &str) -> Result<CmdResult> {
        let result = commands::search::run(&mut self.controller, query);
        self.render(result)
    }

    pub fn clear_search(&mut self) -> Result<CmdResult> {
        let result = commands::search::clear(&mut self.controller);
        self.render(result)
    }

    /// Reveals one configured batch.
    pub fn reveal_more(&mut self) -> Result<CmdResult> {
        self.reveal_more_by(self.batch_size)
    }

    pub fn reveal_more_by(&mut self, batch_size: usize) -> Result<CmdResult> {
        let result = commands::reveal::run(&mut self.controller, batch_size);
        self.render(result)
    }

    pub fn apply_initial_category_from_location(
        &mut self,
        location_query: &str,
    ) -> Result<CmdResult> {
        let result = commands::location::run(&mut self.controller, location_query);
        self.render(result)
    }

    pub fn subscribe(&self, email: &str) -> Result<CmdResult> {
        commands::subscribe::run(email)
    }

    pub fn list(&self) -> Result<CmdResult> {
        Ok(commands::list::run(&self.controller))
    }

    pub fn categories(&self) -> &[Category] {
        self.controller.registry().categories()
    }

    pub fn controller(&self) -> &VisibilityController {
        &self.controller
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn render(&mut self, result: CmdResult) -> Result<CmdResult> {
        render(&mut self.document, &self.controller, &result)?;
        Ok(result)
    }
}

fn render<D: Document>(
    document: &mut D,
    controller: &VisibilityController,
    result: &CmdResult,
) -> Result<()> {
    if !result.changes.is_empty() {
        document.apply_visibility(&result.changes)?;
    }
    document.set_load_more_visible(controller.load_more_visible())?;
    document.set_active_category(controller.active_category())?;
    Ok(())
}

pub use crate::commands::{CmdMessage, MessageLevel, RevealReport, SearchReport};
