use serde::{Deserialize, Serialize};

use crate::brain::{Rewrite, RewriteOutcome, SuggestionItem};
use crate::snippet::Insertion;

/// A request from the browser shell, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostRequest {
    /// Rewrite the field content into a structured prompt.
    Improve {
        #[serde(default)]
        id: Option<String>,
        text: String,
    },
    /// Suggestions for the field content, answered immediately.
    Suggest {
        #[serde(default)]
        id: Option<String>,
        text: String,
    },
    /// The field content changed; suggestions follow after the quiet period.
    TextChanged { revision: u64, text: String },
    /// Insert a suggestion snippet at the caret (a character offset).
    InsertSnippet {
        #[serde(default)]
        id: Option<String>,
        text: String,
        cursor: usize,
        snippet: String,
    },
    Ping {
        #[serde(default)]
        id: Option<String>,
    },
}

impl HostRequest {
    pub fn id(&self) -> Option<&str> {
        match self {
            HostRequest::Improve { id, .. }
            | HostRequest::Suggest { id, .. }
            | HostRequest::InsertSnippet { id, .. }
            | HostRequest::Ping { id } => id.as_deref(),
            HostRequest::TextChanged { .. } => None,
        }
    }
}

/// A response written back to the browser shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostResponse {
    Improved {
        id: Option<String>,
        outcome: RewriteOutcome,
        text: String,
        notice: String,
    },
    /// `revision` is set only for debounced realtime publications.
    Suggestions {
        id: Option<String>,
        revision: Option<u64>,
        items: Vec<SuggestionItem>,
    },
    Inserted {
        id: Option<String>,
        text: String,
        cursor: usize,
    },
    Pong {
        id: Option<String>,
        version: String,
    },
    Error {
        id: Option<String>,
        message: String,
    },
}

impl HostResponse {
    pub fn improved(id: Option<String>, rewrite: Rewrite) -> Self {
        HostResponse::Improved {
            id,
            outcome: rewrite.outcome,
            text: rewrite.text,
            notice: rewrite.notice,
        }
    }

    pub fn inserted(id: Option<String>, insertion: Insertion) -> Self {
        HostResponse::Inserted {
            id,
            text: insertion.text,
            cursor: insertion.cursor,
        }
    }

    pub fn error(id: Option<String>, message: impl Into<String>) -> Self {
        HostResponse::Error {
            id,
            message: message.into(),
        }
    }
}
