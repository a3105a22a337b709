// DeepL REST API v2 wire models
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Body for `POST /v2/translate`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct TranslateRequest {
    pub text: Vec<String>,
    pub target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_formatting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_handling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_sentences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_id: Option<String>,
    pub show_billed_characters: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslateResponse {
    pub translations: Vec<WireTranslation>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireTranslation {
    pub detected_source_language: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub billed_characters: Option<u64>,
}

/// Entry of `GET /v2/languages`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireLanguage {
    pub language: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub supports_formality: Option<bool>,
}

/// Body of `GET /v2/usage`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireUsage {
    pub character_count: Option<u64>,
    pub character_limit: Option<u64>,
    #[serde(default)]
    pub document_count: Option<u64>,
    #[serde(default)]
    pub document_limit: Option<u64>,
    #[serde(default)]
    pub team_document_count: Option<u64>,
    #[serde(default)]
    pub team_document_limit: Option<u64>,
}

/// Body for `POST /v2/glossaries`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateGlossaryRequest {
    pub name: String,
    pub source_lang: String,
    pub target_lang: String,
    pub entries: String,
    pub entries_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireGlossary {
    pub glossary_id: Option<String>,
    pub name: Option<String>,
    pub ready: Option<bool>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub creation_time: Option<String>,
    pub entry_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlossaryList {
    pub glossaries: Vec<WireGlossary>,
}

/// Non-file fields of the multipart `POST /v2/document` upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentUpload {
    pub content: Vec<u8>,
    pub filename: String,
    pub target_lang: String,
    pub source_lang: Option<String>,
    pub formality: Option<String>,
    pub glossary_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireDocumentHandle {
    pub document_id: Option<String>,
    pub document_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireDocumentStatus {
    pub document_id: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub seconds_remaining: Option<u64>,
    #[serde(default)]
    pub billed_characters: Option<u64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Error body DeepL attaches to most non-success responses.
#[derive(Debug, Deserialize)]
pub struct WireError {
    pub message: Option<String>,
    pub detail: Option<String>,
}
