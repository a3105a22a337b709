// JSON-RPC 2.0 / MCP message types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Protocol revision answered when the client asks for one we do not know.
pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";

pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

pub const NOTIFICATION_CANCELLED: &str = "notifications/cancelled";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::String(s) => write!(f, "{}", s),
        }
    }
}

/// A message received from the MCP client.
#[derive(Debug, Clone, PartialEq)]
pub enum Incoming {
    Request {
        id: RequestId,
        method: String,
        params: Option<Value>,
    },
    Notification {
        method: String,
        params: Option<Value>,
    },
    /// Replies to server-initiated requests; this server sends none, so they are ignored.
    Response { id: Option<RequestId> },
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    jsonrpc: Option<String>,
    #[serde(default)]
    id: Option<RequestId>,
    method: Option<String>,
    #[serde(default)]
    params: Option<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Parse one JSON-RPC message, or produce the error response to send back.
pub fn parse_message(raw: &str) -> Result<Incoming, JsonRpcResponse> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| JsonRpcResponse::error(None, JsonRpcError::new(PARSE_ERROR, format!("Parse error: {}", e))))?;

    let message: RawMessage = serde_json::from_value(value)
        .map_err(|e| JsonRpcResponse::error(None, JsonRpcError::invalid_request(e.to_string())))?;

    if message.jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
        return Err(JsonRpcResponse::error(
            message.id,
            JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
        ));
    }

    match (message.id, message.method) {
        (Some(id), Some(method)) => Ok(Incoming::Request {
            id,
            method,
            params: message.params,
        }),
        (None, Some(method)) => Ok(Incoming::Notification {
            method,
            params: message.params,
        }),
        (id, None) if message.result.is_some() || message.error.is_some() => Ok(Incoming::Response { id }),
        (id, None) => Err(JsonRpcResponse::error(id, JsonRpcError::invalid_request("missing method"))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Entry of a `tools/list` result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Result of `tools/call`. Tool failures are reported here with
/// `is_error`, not as JSON-RPC errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    pub is_error: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledParams {
    pub request_id: RequestId,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_and_notification() {
        let request = parse_message(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#).unwrap();
        assert_eq!(
            request,
            Incoming::Request {
                id: RequestId::Number(7),
                method: "tools/list".to_string(),
                params: None,
            }
        );

        let notification =
            parse_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).unwrap();
        assert!(matches!(notification, Incoming::Notification { .. }));
    }

    #[test]
    fn test_parse_error_has_null_id() {
        let response = parse_message("{not json").unwrap_err();
        assert_eq!(response.id, None);
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);

        let json = serde_json::to_value(parse_message("[").unwrap_err()).unwrap();
        assert!(json["id"].is_null());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let response = parse_message(r#"{"jsonrpc":"1.0","id":"a","method":"ping"}"#).unwrap_err();
        assert_eq!(response.id, Some(RequestId::String("a".to_string())));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }
}
