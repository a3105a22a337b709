//! Typed result records returned by the adapter and serialized as tool output.
//!
//! Every record is populated field by field from the DeepL wire models;
//! nothing here is persisted.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// DeepL reports unlimited plans with a limit at or above this value.
pub const UNLIMITED_CHARACTER_THRESHOLD: u64 = 1_000_000_000_000;

/// One translated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_source_lang: String,
    pub billed_characters: u64,
}

/// Output of `translate_text` / `translate_with_glossary`, one entry per input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranslationOutput {
    pub translations: Vec<TranslationResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageDetection {
    pub detected_language: String,
    /// DeepL does not report a confidence; kept for callers that branch on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Preview of the analysed text.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    /// Only reported for target languages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_formality: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageList {
    pub languages: Vec<LanguageInfo>,
}

/// Character limit of the account; unlimited plans serialize as `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CharacterLimit {
    Limited(u64),
    Unlimited(Unlimited),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Unlimited {
    Unlimited,
}

impl CharacterLimit {
    pub fn from_raw(limit: u64) -> Self {
        if limit >= UNLIMITED_CHARACTER_THRESHOLD {
            CharacterLimit::Unlimited(Unlimited::Unlimited)
        } else {
            CharacterLimit::Limited(limit)
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, CharacterLimit::Unlimited(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UsageStats {
    pub character_count: u64,
    pub character_limit: CharacterLimit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_document_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_document_limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GlossaryInfo {
    pub glossary_id: String,
    pub name: String,
    pub source_lang: String,
    pub target_lang: String,
    pub entry_count: u64,
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GlossaryList {
    pub glossaries: Vec<GlossaryInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GlossaryDeletion {
    pub success: bool,
    pub glossary_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Queued,
    Translating,
    Done,
    Error,
}

impl DocumentStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "queued" => Some(DocumentStatus::Queued),
            "translating" => Some(DocumentStatus::Translating),
            "done" => Some(DocumentStatus::Done),
            "error" => Some(DocumentStatus::Error),
            _ => None,
        }
    }
}

/// A provider-side document translation, addressed by its id/key pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentJob {
    pub document_id: String,
    pub document_key: String,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_remaining: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_characters: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Tool-level result of `download_translated_document`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentDownload {
    pub document_id: String,
    pub size: u64,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_base64: Option<String>,
}
