use crate::actors::messages::AppError;
use crate::brain::SuggestionItem;
use async_trait::async_trait;

/// Receives debounced realtime suggestions from a session.
///
/// The host implements this by writing a frame to stdout; tests collect the
/// publications in memory.
#[async_trait]
pub trait SuggestionSink: Send + Sync + 'static {
    /// Publishes the suggestions computed for `revision` of the field content.
    async fn publish(&self, revision: u64, items: Vec<SuggestionItem>) -> Result<(), AppError>;
}
