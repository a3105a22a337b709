// Tool registry and dispatch
// Author: kelexine (https://github.com/kelexine)

use super::protocol::{CallToolResult, ContentBlock, ToolDefinition};
use crate::adapter::DeepLAdapter;
use crate::error::{DeepLError, Result};
use crate::models::{
    CreateGlossaryParams, DetectLanguageParams, DocumentDownload, DocumentHandleParams,
    DownloadDocumentParams, GlossaryIdParams, ListLanguagesParams, NoParams, TranslateDocumentParams,
    TranslateTextParams, TranslateWithGlossaryParams,
};
use base64::Engine;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{info, warn};

/// Content type reported for downloaded documents; DeepL does not send one.
const DOCUMENT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    TranslateText,
    TranslateWithGlossary,
    DetectLanguage,
    ListLanguages,
    GetUsage,
    ListGlossaries,
    CreateGlossary,
    GetGlossary,
    DeleteGlossary,
    TranslateDocument,
    GetDocumentStatus,
    DownloadTranslatedDocument,
}

impl Tool {
    pub const ALL: [Tool; 12] = [
        Tool::TranslateText,
        Tool::TranslateWithGlossary,
        Tool::DetectLanguage,
        Tool::ListLanguages,
        Tool::GetUsage,
        Tool::ListGlossaries,
        Tool::CreateGlossary,
        Tool::GetGlossary,
        Tool::DeleteGlossary,
        Tool::TranslateDocument,
        Tool::GetDocumentStatus,
        Tool::DownloadTranslatedDocument,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::TranslateText => "translate_text",
            Tool::TranslateWithGlossary => "translate_with_glossary",
            Tool::DetectLanguage => "detect_language",
            Tool::ListLanguages => "list_languages",
            Tool::GetUsage => "get_usage",
            Tool::ListGlossaries => "list_glossaries",
            Tool::CreateGlossary => "create_glossary",
            Tool::GetGlossary => "get_glossary",
            Tool::DeleteGlossary => "delete_glossary",
            Tool::TranslateDocument => "translate_document",
            Tool::GetDocumentStatus => "get_document_status",
            Tool::DownloadTranslatedDocument => "download_translated_document",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::TranslateText => "Translate text between languages. Accepts a single string or a list of strings.",
            Tool::TranslateWithGlossary => {
                "Translate text using a custom glossary. The glossary's language pair must match the request."
            }
            Tool::DetectLanguage => "Detect the language of a text.",
            Tool::ListLanguages => {
                "List supported source or target languages. Target languages report whether formality is supported."
            }
            Tool::GetUsage => "Get API usage statistics for the current billing period.",
            Tool::ListGlossaries => "List custom glossaries.",
            Tool::CreateGlossary => "Create a custom glossary from a mapping of source terms to target terms.",
            Tool::GetGlossary => "Get glossary details.",
            Tool::DeleteGlossary => "Delete a glossary.",
            Tool::TranslateDocument => {
                "Upload a local document (PDF, DOCX, PPTX, ...) for translation. Returns a document_id and document_key for polling."
            }
            Tool::GetDocumentStatus => {
                "Check the status of a document translation (queued, translating, done, error)."
            }
            Tool::DownloadTranslatedDocument => {
                "Download a finished document translation, either to output_path or inline as base64."
            }
        }
    }

    pub fn input_schema(&self) -> Value {
        match self {
            Tool::TranslateText => schema_of::<TranslateTextParams>(),
            Tool::TranslateWithGlossary => schema_of::<TranslateWithGlossaryParams>(),
            Tool::DetectLanguage => schema_of::<DetectLanguageParams>(),
            Tool::ListLanguages => schema_of::<ListLanguagesParams>(),
            Tool::GetUsage | Tool::ListGlossaries => schema_of::<NoParams>(),
            Tool::CreateGlossary => schema_of::<CreateGlossaryParams>(),
            Tool::GetGlossary | Tool::DeleteGlossary => schema_of::<GlossaryIdParams>(),
            Tool::TranslateDocument => schema_of::<TranslateDocumentParams>(),
            Tool::GetDocumentStatus => schema_of::<DocumentHandleParams>(),
            Tool::DownloadTranslatedDocument => schema_of::<DownloadDocumentParams>(),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

fn schema_of<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| json!({}));
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
        object.entry("type").or_insert_with(|| json!("object"));
    }
    schema
}

/// Missing or mistyped arguments surface as `invalid_parameter` tool errors.
fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| DeepLError::InvalidParameter(e.to_string()))
}

fn encode<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| DeepLError::Internal(format!("Failed to encode result: {}", e)))
}

/// Runs tool calls against a shared adapter.
#[derive(Clone)]
pub struct ToolRegistry {
    adapter: DeepLAdapter,
}

impl ToolRegistry {
    pub fn new(adapter: DeepLAdapter) -> Self {
        Self { adapter }
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        Tool::ALL.iter().map(Tool::definition).collect()
    }

    /// Invoke a tool and wrap the outcome as a `tools/call` result.
    pub async fn call(&self, tool: Tool, arguments: Option<Value>) -> CallToolResult {
        let arguments = match arguments {
            None | Some(Value::Null) => json!({}),
            Some(value) => value,
        };

        let started = Instant::now();
        let outcome = self.dispatch(tool, arguments).await;
        let elapsed = started.elapsed();

        match outcome {
            Ok(value) => {
                info!("Tool {} succeeded in {:?}", tool.name(), elapsed);
                crate::metrics::record_tool_call(tool.name(), "success", elapsed.as_secs_f64());
                CallToolResult {
                    content: vec![ContentBlock::Text {
                        text: serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
                    }],
                    structured_content: Some(value),
                    is_error: false,
                }
            }
            Err(e) => {
                warn!("Tool {} failed ({}): {}", tool.name(), e.kind(), e);
                crate::metrics::record_tool_call(tool.name(), e.kind(), elapsed.as_secs_f64());
                error_result(&e)
            }
        }
    }

    async fn dispatch(&self, tool: Tool, arguments: Value) -> Result<Value> {
        let adapter = &self.adapter;
        match tool {
            Tool::TranslateText => encode(adapter.translate_text(parse(arguments)?).await?),
            Tool::TranslateWithGlossary => encode(adapter.translate_with_glossary(parse(arguments)?).await?),
            Tool::DetectLanguage => {
                let params: DetectLanguageParams = parse(arguments)?;
                encode(adapter.detect_language(&params.text).await?)
            }
            Tool::ListLanguages => {
                let params: ListLanguagesParams = parse(arguments)?;
                encode(adapter.list_languages(params.language_type).await?)
            }
            Tool::GetUsage => encode(adapter.get_usage().await?),
            Tool::ListGlossaries => encode(adapter.list_glossaries().await?),
            Tool::CreateGlossary => encode(adapter.create_glossary(parse(arguments)?).await?),
            Tool::GetGlossary => {
                let params: GlossaryIdParams = parse(arguments)?;
                encode(adapter.get_glossary(&params.glossary_id).await?)
            }
            Tool::DeleteGlossary => {
                let params: GlossaryIdParams = parse(arguments)?;
                encode(adapter.delete_glossary(&params.glossary_id).await?)
            }
            Tool::TranslateDocument => encode(adapter.translate_document(parse(arguments)?).await?),
            Tool::GetDocumentStatus => {
                let params: DocumentHandleParams = parse(arguments)?;
                encode(
                    adapter
                        .get_document_status(&params.document_id, &params.document_key)
                        .await?,
                )
            }
            Tool::DownloadTranslatedDocument => {
                let params: DownloadDocumentParams = parse(arguments)?;
                encode(self.download(params).await?)
            }
        }
    }

    async fn download(&self, params: DownloadDocumentParams) -> Result<DocumentDownload> {
        let content = self
            .adapter
            .download_translated_document(&params.document_id, &params.document_key)
            .await?;

        let mut download = DocumentDownload {
            document_id: params.document_id,
            size: content.len() as u64,
            content_type: DOCUMENT_CONTENT_TYPE.to_string(),
            saved_to: None,
            content_base64: None,
        };

        match params.output_path.filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                tokio::fs::write(&path, &content).await?;
                info!("Saved translated document to {}", path);
                download.saved_to = Some(path);
            }
            None => {
                download.content_base64 = Some(base64::engine::general_purpose::STANDARD.encode(&content));
            }
        }

        Ok(download)
    }
}

/// Build the `isError` result for a failed tool call.
pub fn error_result(error: &DeepLError) -> CallToolResult {
    let payload = error.to_payload();
    CallToolResult {
        content: vec![ContentBlock::Text {
            text: format!("{}: {}", payload.kind, payload.message),
        }],
        structured_content: Some(json!({ "error": payload })),
        is_error: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("translate"), None);
    }

    #[test]
    fn test_schemas_are_objects_with_required_fields() {
        let schema = Tool::TranslateText.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("$schema").is_none());
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"text"));
        assert!(required.contains(&"target_lang"));
        assert!(!required.contains(&"formality"));
    }

    #[test]
    fn test_no_argument_tools_have_object_schema() {
        assert_eq!(Tool::GetUsage.input_schema()["type"], "object");
    }

    #[test]
    fn test_error_result_shape() {
        let result = error_result(&DeepLError::NotFound("glossary not found".to_string()));
        assert!(result.is_error);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["kind"], "provider_not_found");
        assert_eq!(structured["error"]["status"], 404);
    }
}
