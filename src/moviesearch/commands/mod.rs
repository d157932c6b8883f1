use serde::Serialize;

use crate::config::MovieSearchConfig;
use crate::model::Movie;

pub mod config;
pub mod edit;
pub mod paginate;
pub mod reset;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The slice of results currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub movies: Vec<Movie>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
}

impl PageView {
    /// The pager is hidden when there is nothing to page through.
    pub fn shows_pager(&self) -> bool {
        self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<PageView>,
    pub config: Option<MovieSearchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: PageView) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: MovieSearchConfig) -> Self {
        self.config = Some(config);
        self
    }
}
