//! Session Actor Tests
//!
//! Debounced realtime suggestions, stale revisions and request handling.
//! Timing tests run on paused tokio time so they are deterministic.

use crate::actors::messages::{ActorError, AppError};
use crate::actors::session::SessionHandle;
use crate::actors::traits::SuggestionSink;
use crate::brain::{generate_suggestions, improve, RewriteOutcome, SuggestionItem};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

const DEBOUNCE: Duration = Duration::from_millis(200);

// ============================================================================
// Mock Sink
// ============================================================================

/// Records every publication
#[derive(Default)]
pub struct RecordingSink {
    published: Mutex<Vec<(u64, Vec<SuggestionItem>)>>,
    should_fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn revisions(&self) -> Vec<u64> {
        self.published.lock().unwrap().iter().map(|(r, _)| *r).collect()
    }

    pub fn last(&self) -> Option<(u64, Vec<SuggestionItem>)> {
        self.published.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SuggestionSink for RecordingSink {
    async fn publish(&self, revision: u64, items: Vec<SuggestionItem>) -> Result<(), AppError> {
        self.published.lock().unwrap().push((revision, items));
        if self.should_fail {
            return Err(AppError::Protocol("sink closed".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Debounce
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_burst_publishes_once_for_last_revision() {
    let sink = Arc::new(RecordingSink::default());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    session.text_changed(1, "Write".to_string()).await.unwrap();
    sleep(Duration::from_millis(50)).await;
    session.text_changed(2, "Write a poem".to_string()).await.unwrap();
    sleep(Duration::from_millis(50)).await;
    session.text_changed(3, "Write a poem about rain".to_string()).await.unwrap();

    sleep(Duration::from_millis(150)).await;
    assert!(sink.revisions().is_empty(), "Published before the quiet period");

    sleep(Duration::from_millis(100)).await;
    assert_eq!(sink.revisions(), vec![3]);

    let (_, items) = sink.last().unwrap();
    assert_eq!(items, generate_suggestions("Write a poem about rain"));
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_publish_separately() {
    let sink = Arc::new(RecordingSink::default());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    session.text_changed(1, "First draft".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;
    session.text_changed(2, "Second draft".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(sink.revisions(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_revision_is_ignored() {
    let sink = Arc::new(RecordingSink::default());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    session.text_changed(5, "Newest text".to_string()).await.unwrap();
    session.text_changed(4, "Older text".to_string()).await.unwrap();
    session.text_changed(5, "Duplicate".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;

    let (revision, items) = sink.last().unwrap();
    assert_eq!(sink.revisions(), vec![5]);
    assert_eq!(revision, 5);
    assert_eq!(items, generate_suggestions("Newest text"));
}

#[tokio::test(start_paused = true)]
async fn test_stale_after_publish_is_ignored() {
    let sink = Arc::new(RecordingSink::default());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    session.text_changed(2, "Current".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;
    session.text_changed(1, "Late arrival".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(sink.revisions(), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn test_sink_failure_keeps_session_alive() {
    let sink = Arc::new(RecordingSink::failing());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    session.text_changed(1, "One".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;
    session.text_changed(2, "Two".to_string()).await.unwrap();
    sleep(Duration::from_millis(300)).await;

    assert_eq!(sink.revisions(), vec![1, 2]);
    assert!(session.suggest("Three".to_string()).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_drops_pending_work() {
    let sink = Arc::new(RecordingSink::default());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    session.text_changed(1, "Pending".to_string()).await.unwrap();
    session.shutdown().await.unwrap();
    sleep(Duration::from_millis(300)).await;

    assert!(sink.revisions().is_empty());
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_improve_matches_pipeline() {
    let session = SessionHandle::new(Arc::new(RecordingSink::default()), DEBOUNCE);
    let text = "Write a blog post about cats. Make it fun!";

    let rewrite = session.improve(text.to_string()).await.unwrap();

    assert_eq!(rewrite, improve(text));
    assert_eq!(rewrite.outcome, RewriteOutcome::Improved);
}

#[tokio::test]
async fn test_suggest_bypasses_debounce() {
    let sink = Arc::new(RecordingSink::default());
    let session = SessionHandle::new(sink.clone(), DEBOUNCE);

    let items = session.suggest(String::new()).await.unwrap();

    assert_eq!(items, generate_suggestions(""));
    assert!(sink.revisions().is_empty());
}

#[tokio::test]
async fn test_requests_after_shutdown_fail() {
    let session = SessionHandle::new(Arc::new(RecordingSink::default()), DEBOUNCE);
    session.shutdown().await.unwrap();

    // Queued requests are dropped with the mailbox, later ones find it closed.
    let result = session.improve("Hello".to_string()).await;

    assert!(matches!(
        result,
        Err(AppError::Actor(ActorError::Closed(_))) | Err(AppError::Actor(ActorError::Dropped(_)))
    ));
}
