use crate::model::{DisplayItem, VisibilityChange};

pub mod filter;
pub mod initialize;
pub mod list;
pub mod location;
pub mod reveal;
pub mod search;
pub mod subscribe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReport {
    /// The query was empty or whitespace; nothing changed.
    MissingQuery,
    /// The query matched nothing. Carries the query as typed.
    NoResults { query: String },
    Matches { query: String, count: usize },
}

impl SearchReport {
    pub fn match_count(&self) -> usize {
        match self {
            SearchReport::Matches { count, .. } => *count,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealReport {
    pub revealed: usize,
    /// Terminal signal: the last pending item was disclosed by this call.
    pub all_loaded: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub changes: Vec<VisibilityChange>,
    pub listed_items: Vec<DisplayItem>,
    /// Category applied by a filter or location request.
    pub category: Option<String>,
    pub search: Option<SearchReport>,
    pub reveal: Option<RevealReport>,
    pub subscribed: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_changes(mut self, changes: Vec<VisibilityChange>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, report: SearchReport) -> Self {
        self.search = Some(report);
        self
    }

    pub fn with_reveal(mut self, report: RevealReport) -> Self {
        self.reveal = Some(report);
        self
    }

    pub fn with_subscribed(mut self, email: impl Into<String>) -> Self {
        self.subscribed = Some(email.into());
        self
    }
}
