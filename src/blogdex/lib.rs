//! # Blogdex Architecture
//!
//! Blogdex is the interaction core of a blog index page: category filters,
//! text search, "load more" pagination, newsletter sign-up and the one-shot
//! `?category=` read at startup. It is a library first; the `blogdex` binary
//! is one client that plays the part of the page in a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs sessions, prints visible items    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the VisibilityController                            │
//! │  - Dispatches to commands, renders results into a Document  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure state transitions over the controller               │
//! │  - Return visibility changes and user messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document Layer (document/)                                 │
//! │  - Document trait: item provider + visibility sink          │
//! │  - FileDocument (JSON manifest), InMemoryDocument (tests)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modes
//!
//! Exactly one regime decides visibility at a time:
//!
//! - **Browsing**: the first `reveal_cursor` items are visible; "load more"
//!   discloses the next batch.
//! - **Filtered**: every item of the selected category is visible at once.
//! - **Searched**: every item whose title or description contains the query.
//!
//! Selecting the `all` category (or clearing a search) goes back to Browsing
//! with the pagination progress intact.
//!
//! ## Testing Strategy
//!
//! Transition logic is tested in `commands/*.rs` against
//! `document::memory::fixtures::PageFixture`; the API tests check that
//! results reach the document; `tests/` drives the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`controller`]: The visibility state owned by the API
//! - [`document`]: Page abstraction and implementations
//! - [`model`]: Items, categories, modes
//! - [`config`]: Page and batch sizes
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod model;
