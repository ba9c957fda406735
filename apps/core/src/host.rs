//! Native-messaging host.
//!
//! Browsers talk to the host over stdin/stdout with length-prefixed frames:
//! a 4-byte native-endian `u32` length followed by a UTF-8 JSON body.

use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::actors::session::SessionHandle;
use crate::actors::traits::SuggestionSink;
use crate::brain::SuggestionItem;
use crate::config::HostConfig;
use crate::error::AppError;
use crate::models::{HostRequest, HostResponse};
use crate::snippet::insert_snippet;

const HEADER_LEN: usize = 4;

/// Reads one frame. Returns `Ok(None)` on a clean EOF before a header.
pub async fn read_frame<R>(reader: &mut R, limit: usize) -> Result<Option<Vec<u8>>, AppError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        let n = reader.read(&mut header[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(AppError::Protocol("Truncated frame header".to_string()));
        }
        filled += n;
    }

    let size = u32::from_ne_bytes(header) as usize;
    if size > limit {
        return Err(AppError::MessageTooLarge { size, limit });
    }

    let mut body = vec![0u8; size];
    reader.read_exact(&mut body).await.map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            AppError::Protocol(format!("Truncated frame body, expected {} bytes", size))
        } else {
            AppError::Io(e)
        }
    })?;
    Ok(Some(body))
}

/// Writes one frame and flushes.
pub async fn write_frame<W>(writer: &mut W, body: &[u8]) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let size = u32::try_from(body.len())
        .map_err(|_| AppError::Protocol(format!("Frame of {} bytes is too large", body.len())))?;
    writer.write_all(&size.to_ne_bytes()).await?;
    writer.write_all(body).await?;
    writer.flush().await?;
    Ok(())
}

async fn send_response<W>(writer: &Mutex<W>, response: &HostResponse) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let body = serde_json::to_vec(response)?;
    let mut writer = writer.lock().await;
    write_frame(&mut *writer, &body).await
}

/// Publishes debounced suggestions as `suggestions` frames.
pub struct FrameSink<W> {
    writer: Arc<Mutex<W>>,
}

impl<W> FrameSink<W> {
    pub fn new(writer: Arc<Mutex<W>>) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl<W> SuggestionSink for FrameSink<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn publish(&self, revision: u64, items: Vec<SuggestionItem>) -> Result<(), AppError> {
        let response = HostResponse::Suggestions {
            id: None,
            revision: Some(revision),
            items,
        };
        send_response(self.writer.as_ref(), &response).await
    }
}

/// Serves requests from `reader` until EOF, answering on `writer`.
///
/// Malformed bodies get an `error` response and the loop goes on. An oversized
/// or truncated frame ends the loop since the stream is no longer in sync.
pub async fn run_host<R, W>(mut reader: R, writer: W, config: &HostConfig) -> Result<(), AppError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let writer = Arc::new(Mutex::new(writer));
    let session = SessionHandle::new(Arc::new(FrameSink::new(writer.clone())), config.debounce());
    info!(max_message_bytes = config.max_message_bytes, "Host ready");

    let result = serve(&mut reader, writer.as_ref(), &session, config.max_message_bytes).await;

    if session.shutdown().await.is_err() {
        debug!("Session already stopped");
    }
    match &result {
        Ok(()) => info!("Input closed, host stopping"),
        Err(e) => error!("Host stopped: {}", e),
    }
    result
}

async fn serve<R, W>(
    reader: &mut R,
    writer: &Mutex<W>,
    session: &SessionHandle,
    limit: usize,
) -> Result<(), AppError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let body = match read_frame(reader, limit).await {
            Ok(Some(body)) => body,
            Ok(None) => return Ok(()),
            Err(e @ (AppError::MessageTooLarge { .. } | AppError::Protocol(_))) => {
                send_response(writer, &HostResponse::error(None, e.to_string())).await?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let response = match serde_json::from_slice::<HostRequest>(&body) {
            Ok(request) => {
                let id = request.id().map(str::to_string);
                match dispatch(session, request).await {
                    Ok(response) => response,
                    Err(e) => {
                        warn!("Request failed: {}", e);
                        Some(HostResponse::error(id, e.to_string()))
                    }
                }
            }
            Err(e) => {
                warn!("Rejected malformed request: {}", e);
                Some(HostResponse::error(None, AppError::from(e).to_string()))
            }
        };

        if let Some(response) = response {
            send_response(writer, &response).await?;
        }
    }
}

/// Runs one request. `text_changed` has no direct answer.
async fn dispatch(
    session: &SessionHandle,
    request: HostRequest,
) -> Result<Option<HostResponse>, AppError> {
    let response = match request {
        HostRequest::Improve { id, text } => {
            let rewrite = session.improve(text).await?;
            HostResponse::improved(id, rewrite)
        }
        HostRequest::Suggest { id, text } => HostResponse::Suggestions {
            id,
            revision: None,
            items: session.suggest(text).await?,
        },
        HostRequest::TextChanged { revision, text } => {
            session.text_changed(revision, text).await?;
            return Ok(None);
        }
        HostRequest::InsertSnippet {
            id,
            text,
            cursor,
            snippet,
        } => HostResponse::inserted(id, insert_snippet(&text, cursor, &snippet)),
        HostRequest::Ping { id } => HostResponse::Pong {
            id,
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };
    Ok(Some(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_frame_round_trip() {
        let mut buffer = Vec::new();
        write_frame(&mut buffer, b"{\"type\":\"ping\"}").await.unwrap();
        assert_eq!(&buffer[..4], &15u32.to_ne_bytes());

        let mut reader = &buffer[..];
        let body = read_frame(&mut reader, 1024).await.unwrap();
        assert_eq!(body.as_deref(), Some(&b"{\"type\":\"ping\"}"[..]));
        assert!(read_frame(&mut reader, 1024).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_truncated_header() {
        let mut reader: &[u8] = &[1, 0];
        let result = read_frame(&mut reader, 1024).await;
        assert!(matches!(result, Err(AppError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_truncated_body() {
        let mut frame = 10u32.to_ne_bytes().to_vec();
        frame.extend_from_slice(b"abc");
        let mut reader = &frame[..];
        let result = read_frame(&mut reader, 1024).await;
        assert!(matches!(result, Err(AppError::Protocol(_))));
    }
}
