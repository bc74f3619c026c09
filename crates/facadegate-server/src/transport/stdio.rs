//! Line-oriented session loop.
//!
//! One JSON request header per line, one JSON response header per line.
//! Per request: bounded read, UTF-8 and decode, resolve through the session
//! root, invoke. Bad lines (oversize, not UTF-8, malformed) are answered and
//! the session carries on; EOF ends it. A line never buffers more than
//! `max_request_bytes + 1` bytes.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::Instrument;

use facadegate_core::error::{FacadeGateError, Result};
use facadegate_core::protocol::{decode_request, Response};

use crate::app_state::AppState;
use crate::dispatch::MethodFinder;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

pub async fn run_session<R, W>(app: AppState, reader: R, writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let session_id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
    let span = tracing::info_span!("session", session_id);
    serve(app, reader, writer).instrument(span).await
}

async fn serve<R, W>(app: AppState, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let root = app.new_session();
    let max_bytes = app.cfg().server.max_request_bytes;
    let mut buf = Vec::with_capacity(1024);

    tracing::info!("session started");

    loop {
        buf.clear();
        let n = (&mut reader)
            .take(max_bytes as u64 + 1)
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| FacadeGateError::Internal(format!("read failed: {e}")))?;
        if n == 0 {
            break;
        }

        let resp = match split_line(&buf, max_bytes) {
            Some(line) => match handle_line(&root, line).await {
                Some(resp) => resp,
                None => continue,
            },
            None => {
                discard_line(&mut reader)
                    .await
                    .map_err(|e| FacadeGateError::Internal(format!("read failed: {e}")))?;
                Response::err(
                    0,
                    &FacadeGateError::BadRequest(format!("request exceeds {max_bytes} bytes")),
                )
            }
        };

        let mut out = serde_json::to_string(&resp)
            .map_err(|e| FacadeGateError::Internal(format!("encode response failed: {e}")))?;
        out.push('\n');
        writer
            .write_all(out.as_bytes())
            .await
            .map_err(|e| FacadeGateError::Internal(format!("write failed: {e}")))?;
        writer
            .flush()
            .await
            .map_err(|e| FacadeGateError::Internal(format!("flush failed: {e}")))?;
    }

    tracing::info!("session closed");
    Ok(())
}

/// Line content without its newline, or `None` when the cap was hit before a
/// newline showed up.
fn split_line(buf: &[u8], max_bytes: usize) -> Option<&[u8]> {
    match buf.split_last() {
        Some((&b'\n', line)) => Some(line),
        // EOF without a trailing newline
        _ if buf.len() <= max_bytes => Some(buf),
        _ => None,
    }
}

/// Drop the rest of an oversize line, up to and including its newline.
async fn discard_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let chunk = reader.fill_buf().await?;
        if chunk.is_empty() {
            return Ok(());
        }
        let (used, done) = match chunk.iter().position(|b| *b == b'\n') {
            Some(i) => (i + 1, true),
            None => (chunk.len(), false),
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}

async fn handle_line<F: MethodFinder>(root: &F, line: &[u8]) -> Option<Response> {
    let line = match std::str::from_utf8(line) {
        Ok(line) => line,
        Err(e) => {
            return Some(Response::err(
                0,
                &FacadeGateError::BadRequest(format!("request is not utf-8: {e}")),
            ))
        }
    };
    if line.trim().is_empty() {
        return None;
    }

    let req = match decode_request(line) {
        Ok(req) => req,
        Err(e) => return Some(Response::err(0, &e)),
    };
    let id = req.request_id;

    let result = async {
        let caller = root.find_method(&req.facade, req.version, &req.request)?;
        let params = req.params_value()?;
        caller.call(params).await
    }
    .await;

    match result {
        Ok(v) => Some(Response::ok(id, v)),
        Err(e) => {
            if !e.is_not_supported() {
                tracing::debug!(request_id = id, facade = %req.facade, error = %e, "request failed");
            }
            Some(Response::err(id, &e))
        }
    }
}
