use crate::actors::messages::{ActorError, AppError, SessionMessage};
use crate::actors::traits::SuggestionSink;
use crate::brain::{generate_suggestions, improve, Rewrite, SuggestionItem};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, timeout, Duration, Instant};
use tracing::{debug, info, instrument, warn};

const ACTOR_NAME: &str = "Session";
const MAILBOX_SIZE: usize = 32;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A handle to the `SessionRunner`.
///
/// One session exists per host connection. It owns the state the browser shell
/// used to keep globally (latest revision, pending realtime work) so the
/// pipeline itself stays stateless.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
}

impl SessionHandle {
    /// Spawns a session that publishes debounced suggestions to `sink`.
    ///
    /// # Arguments
    ///
    /// * `sink` - Where realtime suggestions go once the quiet period elapses.
    /// * `debounce` - The quiet period after the last `text_changed`.
    pub fn new<S: SuggestionSink>(sink: Arc<S>, debounce: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(MAILBOX_SIZE);
        let runner = SessionRunner::new(receiver, sink, debounce);
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    /// Rewrites `text` into a structured prompt.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn improve(&self, text: String) -> Result<Rewrite, AppError> {
        let (send, recv) = oneshot::channel();
        self.send(SessionMessage::Improve {
            text,
            responder: send,
        })
        .await?;
        Self::await_reply(recv).await
    }

    /// Computes suggestions for `text` right away, bypassing the debounce.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn suggest(&self, text: String) -> Result<Vec<SuggestionItem>, AppError> {
        let (send, recv) = oneshot::channel();
        self.send(SessionMessage::Suggest {
            text,
            responder: send,
        })
        .await?;
        Self::await_reply(recv).await
    }

    /// Records a new revision of the field content.
    pub async fn text_changed(&self, revision: u64, text: String) -> Result<(), AppError> {
        self.send(SessionMessage::TextChanged { revision, text }).await
    }

    /// Stops the session.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.send(SessionMessage::Shutdown).await
    }

    async fn send(&self, msg: SessionMessage) -> Result<(), AppError> {
        self.sender
            .send(msg)
            .await
            .map_err(|_| ActorError::Closed(ACTOR_NAME.to_string()).into())
    }

    async fn await_reply<T>(recv: oneshot::Receiver<T>) -> Result<T, AppError> {
        timeout(REQUEST_TIMEOUT, recv)
            .await?
            .map_err(|_| ActorError::Dropped(ACTOR_NAME.to_string()).into())
    }
}

/// Latest field content waiting for its quiet period to elapse
struct Pending {
    revision: u64,
    text: String,
    deadline: Instant,
}

// --- Actor Runner ---
struct SessionRunner<S: SuggestionSink> {
    receiver: mpsc::Receiver<SessionMessage>,
    sink: Arc<S>,
    debounce: Duration,
    latest_revision: Option<u64>,
    pending: Option<Pending>,
}

impl<S: SuggestionSink> SessionRunner<S> {
    fn new(receiver: mpsc::Receiver<SessionMessage>, sink: Arc<S>, debounce: Duration) -> Self {
        Self {
            receiver,
            sink,
            debounce,
            latest_revision: None,
            pending: None,
        }
    }

    async fn run(mut self) {
        info!(debounce_ms = self.debounce.as_millis() as u64, "Session started");
        loop {
            let deadline = self.pending.as_ref().map(|p| p.deadline);

            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(SessionMessage::Shutdown) | None => break,
                    Some(msg) => self.handle_message(msg),
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.flush().await;
                }
            }
        }
        if let Some(pending) = self.pending.take() {
            debug!(revision = pending.revision, "Dropping pending suggestions on shutdown");
        }
        info!("Session stopped");
    }

    fn handle_message(&mut self, msg: SessionMessage) {
        match msg {
            SessionMessage::Improve { text, responder } => {
                let rewrite = improve(&text);
                info!(outcome = %rewrite.outcome, "Improve request handled");
                let _ = responder.send(rewrite);
            }
            SessionMessage::Suggest { text, responder } => {
                let _ = responder.send(generate_suggestions(&text));
            }
            SessionMessage::TextChanged { revision, text } => {
                self.schedule(revision, text);
            }
            SessionMessage::Shutdown => {}
        }
    }

    /// Re-arms the quiet period for the newest revision; older ones are stale.
    fn schedule(&mut self, revision: u64, text: String) {
        if let Some(latest) = self.latest_revision {
            if revision <= latest {
                debug!(revision, latest, "Ignoring stale revision");
                return;
            }
        }
        self.latest_revision = Some(revision);
        self.pending = Some(Pending {
            revision,
            text,
            deadline: Instant::now() + self.debounce,
        });
    }

    async fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let items = generate_suggestions(&pending.text);
        debug!(revision = pending.revision, count = items.len(), "Publishing suggestions");

        if let Err(e) = self.sink.publish(pending.revision, items).await {
            warn!(revision = pending.revision, "Failed to publish suggestions: {}", e);
        }
    }
}
