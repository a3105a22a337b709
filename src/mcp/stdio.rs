// stdio transport: newline-delimited JSON-RPC
// Author: kelexine (https://github.com/kelexine)

use super::handler::McpHandler;
use super::protocol::{
    parse_message, CancelledParams, Incoming, JsonRpcError, JsonRpcResponse, RequestId, NOTIFICATION_CANCELLED,
    PARSE_ERROR,
};
use crate::error::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};

type InFlight = Arc<Mutex<HashMap<RequestId, AbortHandle>>>;

/// Serve MCP over the process's stdin/stdout until stdin closes.
pub async fn serve_stdio(handler: McpHandler) -> Result<()> {
    info!("Serving MCP over stdio");
    serve(handler, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Serve MCP over any line-oriented reader/writer pair.
///
/// Requests run concurrently on their own tasks; responses are written by a
/// single writer task so lines never interleave. A `notifications/cancelled`
/// aborts the referenced request, which then gets no response.
///
/// A line that is not valid UTF-8 gets a parse error reply and the session
/// continues. Reusing the id of a request still in flight is an invalid request.
pub async fn serve<R, W>(handler: McpHandler, reader: R, writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    let writer_task = tokio::spawn(write_responses(rx, writer));
    let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));

    let mut reader = reader;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) => {
                warn!("Rejected message that is not valid UTF-8");
                let _ = tx.send(JsonRpcResponse::error(
                    None,
                    JsonRpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ));
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let message = match parse_message(line) {
            Ok(message) => message,
            Err(response) => {
                warn!("Rejected malformed message");
                let _ = tx.send(response);
                continue;
            }
        };

        match message {
            Incoming::Request { id, method, params } => {
                // Hold the lock across spawn so the task cannot deregister before it is registered
                let mut guard = in_flight.lock();
                if guard.contains_key(&id) {
                    warn!("Rejected request {}: id is already in flight", id);
                    let _ = tx.send(JsonRpcResponse::error(
                        Some(id),
                        JsonRpcError::invalid_request("request id is already in use"),
                    ));
                    continue;
                }

                let handler = handler.clone();
                let tx = tx.clone();
                let registry = in_flight.clone();
                let task_id = id.clone();

                let task = tokio::spawn(async move {
                    let response = handler
                        .handle(Incoming::Request {
                            id: task_id.clone(),
                            method,
                            params,
                        })
                        .await;
                    registry.lock().remove(&task_id);
                    if let Some(response) = response {
                        let _ = tx.send(response);
                    }
                });
                guard.insert(id, task.abort_handle());
            }
            Incoming::Notification { method, params } if method == NOTIFICATION_CANCELLED => {
                cancel(&in_flight, params);
            }
            other => {
                handler.handle(other).await;
            }
        }
    }

    let pending = in_flight.lock().len();
    debug!("Input closed, waiting for {} in-flight request(s)", pending);
    drop(tx);

    match writer_task.await {
        Ok(result) => result?,
        Err(e) => error!("Writer task failed: {}", e),
    }

    info!("stdio session ended");
    Ok(())
}

fn cancel(in_flight: &InFlight, params: Option<serde_json::Value>) {
    let Some(params) = params.and_then(|p| serde_json::from_value::<CancelledParams>(p).ok()) else {
        warn!("Ignoring cancellation without a valid requestId");
        return;
    };

    match in_flight.lock().remove(&params.request_id) {
        Some(handle) => {
            handle.abort();
            info!(
                "Cancelled request {} ({})",
                params.request_id,
                params.reason.as_deref().unwrap_or("no reason given")
            );
        }
        None => debug!("Cancellation for unknown or finished request {}", params.request_id),
    }
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>, mut writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let line = match serde_json::to_string(&response) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                continue;
            }
        };
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}
