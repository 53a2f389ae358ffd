//! JSON-RPC 2.0 tool server over HTTP and stdio.
//!
//! Both transports hand each message to [`handle_message`]. Tool calls run on
//! their own task, so a panic inside one call is reported as text and does not
//! take down the transport or other calls.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::ServerConfig;
use crate::fetchers::PageSource;
use crate::tools::{Dispatcher, tool_definitions};

pub const SERVER_NAME: &str = "guildwars-wiki";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

impl JsonRpcResponse {
    fn ok(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Handle one raw JSON message; `None` when no reply is due
pub async fn handle_text<S>(dispatcher: &Arc<Dispatcher<S>>, text: &str) -> Option<JsonRpcResponse>
where
    S: PageSource + 'static,
{
    match serde_json::from_str::<JsonRpcRequest>(text) {
        Ok(request) => handle_message(dispatcher, request).await,
        Err(e) => {
            ::log::warn!("Unparseable message: {}", e);
            Some(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", e),
            ))
        }
    }
}

/// Handle one decoded request; notifications (no id) get no reply
pub async fn handle_message<S>(
    dispatcher: &Arc<Dispatcher<S>>,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse>
where
    S: PageSource + 'static,
{
    let Some(id) = request.id else {
        ::log::debug!("Notification: {}", request.method);
        return None;
    };

    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::error(
            id,
            INVALID_REQUEST,
            "jsonrpc must be 2.0",
        ));
    }

    ::log::debug!("Request {}: {}", id, request.method);

    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": { "listChanged": false } },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        ),
        "ping" => JsonRpcResponse::ok(id, json!({})),
        "tools/list" => JsonRpcResponse::ok(id, json!({ "tools": tool_definitions() })),
        "tools/call" => {
            let params = request
                .params
                .and_then(|p| serde_json::from_value::<ToolCallParams>(p).ok());
            match params {
                Some(params) => {
                    let text = run_tool(dispatcher, params).await;
                    JsonRpcResponse::ok(
                        id,
                        json!({
                            "content": [{ "type": "text", "text": text }],
                            "isError": false,
                        }),
                    )
                }
                None => JsonRpcResponse::error(id, INVALID_PARAMS, "Invalid tool call parameters"),
            }
        }
        other => {
            ::log::warn!("Unknown method: {}", other);
            JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Some(response)
}

/// Run a tool call on its own task and turn a panic into an error message
async fn run_tool<S>(dispatcher: &Arc<Dispatcher<S>>, params: ToolCallParams) -> String
where
    S: PageSource + 'static,
{
    let dispatcher = Arc::clone(dispatcher);
    let name = params.name.clone();
    let task = tokio::spawn(async move {
        dispatcher
            .call_tool(&params.name, &params.arguments)
            .await
    });

    match task.await {
        Ok(text) => text,
        Err(e) => {
            ::log::error!("Tool call {} failed: {}", name, e);
            format!("Error: {}", e)
        }
    }
}

/// HTTP routes: `POST /mcp` for messages, `GET /health` for liveness
pub fn router<S>(dispatcher: Arc<Dispatcher<S>>) -> Router
where
    S: PageSource + 'static,
{
    Router::new()
        .route("/mcp", post(mcp_handler::<S>))
        .route("/health", get(health))
        .with_state(dispatcher)
}

async fn mcp_handler<S>(State(dispatcher): State<Arc<Dispatcher<S>>>, body: String) -> Response
where
    S: PageSource + 'static,
{
    match handle_text(&dispatcher, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Serve the HTTP transport until the listener fails
pub async fn serve_http<S>(config: &ServerConfig, dispatcher: Arc<Dispatcher<S>>) -> std::io::Result<()>
where
    S: PageSource + 'static,
{
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    ::log::info!(
        "Starting {} server on http://{}",
        SERVER_NAME,
        listener.local_addr()?
    );
    axum::serve(listener, router(dispatcher)).await
}

/// Serve newline-delimited JSON-RPC until `input` reaches EOF
///
/// Messages are handled concurrently; a single writer task serialises replies
/// onto `output`. A line that is not valid UTF-8 gets a parse error reply.
pub async fn serve_stdio<S, R, W>(
    dispatcher: Arc<Dispatcher<S>>,
    mut input: R,
    output: W,
) -> std::io::Result<()>
where
    S: PageSource + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    ::log::info!("Starting {} server on stdio", SERVER_NAME);

    let (reply_tx, mut reply_rx) = mpsc::channel::<JsonRpcResponse>(64);

    let writer = tokio::spawn(async move {
        let mut output = output;
        while let Some(reply) = reply_rx.recv().await {
            let mut line = serde_json::to_string(&reply).map_err(std::io::Error::other)?;
            line.push('\n');
            output.write_all(line.as_bytes()).await?;
            output.flush().await?;
        }
        Ok::<(), std::io::Error>(())
    });

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line.to_string(),
            Err(e) => {
                ::log::warn!("Undecodable message: {}", e);
                let reply =
                    JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {}", e));
                if let Err(e) = reply_tx.send(reply).await {
                    ::log::error!("Failed to queue reply: {}", e);
                }
                continue;
            }
        };

        let dispatcher = Arc::clone(&dispatcher);
        let reply_tx = reply_tx.clone();
        tokio::spawn(async move {
            if let Some(reply) = handle_text(&dispatcher, &line).await {
                if let Err(e) = reply_tx.send(reply).await {
                    ::log::error!("Failed to queue reply: {}", e);
                }
            }
        });
    }

    ::log::info!("Input closed, shutting down");

    // Writer finishes once every in-flight handler drops its sender
    drop(reply_tx);
    match writer.await {
        Ok(result) => result,
        Err(e) => Err(std::io::Error::other(e)),
    }
}
