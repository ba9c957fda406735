use serde::Serialize;
use tokio::sync::oneshot;

use crate::brain::{Rewrite, SuggestionItem};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The actor's mailbox is closed; it has stopped.
    #[error("{0} actor is not running")]
    Closed(String),
    /// The actor dropped the responder without answering.
    #[error("{0} actor dropped the request")]
    Dropped(String),
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the `SessionRunner`.
#[derive(Debug)]
pub enum SessionMessage {
    /// Explicit "improve" action on the current field content.
    Improve {
        text: String,
        /// A channel to send the rewrite back.
        responder: oneshot::Sender<Rewrite>,
    },
    /// Immediate (non-debounced) suggestion request.
    Suggest {
        text: String,
        responder: oneshot::Sender<Vec<SuggestionItem>>,
    },
    /// The field content changed. Suggestions are published to the sink once
    /// the quiet period elapses without a newer revision.
    TextChanged { revision: u64, text: String },
    /// A command to stop the session. Pending debounced work is dropped.
    Shutdown,
}
