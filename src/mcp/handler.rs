// MCP method routing
// Author: kelexine (https://github.com/kelexine)

use super::protocol::{
    CallToolParams, Incoming, JsonRpcError, JsonRpcResponse, RequestId, LATEST_PROTOCOL_VERSION,
    SUPPORTED_PROTOCOL_VERSIONS,
};
use super::tools::{Tool, ToolRegistry};
use serde_json::{json, Value};
use tracing::{debug, info};

pub const SERVER_NAME: &str = "mcp-deepl";

const INSTRUCTIONS: &str = "Tools for the DeepL translation API. Document translation is a three step \
flow: translate_document returns a document_id and document_key, poll get_document_status until the \
status is done, then call download_translated_document with the same pair.";

/// Transport-independent MCP request handler.
#[derive(Clone)]
pub struct McpHandler {
    tools: ToolRegistry,
}

impl McpHandler {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    /// Handle one incoming message. Notifications and responses produce no reply.
    pub async fn handle(&self, message: Incoming) -> Option<JsonRpcResponse> {
        match message {
            Incoming::Request { id, method, params } => Some(self.handle_request(id, &method, params).await),
            Incoming::Notification { method, .. } => {
                debug!("Received notification {}", method);
                None
            }
            Incoming::Response { id } => {
                debug!("Ignoring client response for request {:?}", id);
                None
            }
        }
    }

    async fn handle_request(&self, id: RequestId, method: &str, params: Option<Value>) -> JsonRpcResponse {
        debug!("Handling {} (id {})", method, id);

        let result = match method {
            "initialize" => Ok(Self::initialize(params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.tools.definitions() })),
            "tools/call" => self.call_tool(params).await,
            _ => Err(JsonRpcError::method_not_found(method)),
        };

        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(Some(id), error),
        }
    }

    fn initialize(params: Option<&Value>) -> Value {
        let requested = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str);

        let protocol_version = match requested {
            Some(version) if SUPPORTED_PROTOCOL_VERSIONS.contains(&version) => version,
            _ => LATEST_PROTOCOL_VERSION,
        };

        let client = params
            .and_then(|p| p.pointer("/clientInfo/name"))
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        info!("Initializing session for client {} (protocol {})", client, protocol_version);

        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            },
            "instructions": INSTRUCTIONS,
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        let tool = Tool::from_name(&params.name)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        let result = self.tools.call(tool, params.arguments).await;
        serde_json::to_value(result).map_err(|e| JsonRpcError::new(super::protocol::INTERNAL_ERROR, e.to_string()))
    }
}
