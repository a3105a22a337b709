// Tool parameter shapes
// Author: kelexine (https://github.com/kelexine)
//
// Each struct doubles as the JSON Schema advertised in `tools/list`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single text or a batch of texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TextInput {
    One(String),
    Many(Vec<String>),
}

impl TextInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TextInput::One(text) => vec![text],
            TextInput::Many(texts) => texts,
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::One(text.to_string())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TranslateTextParams {
    /// Text to translate (string or list of strings)
    pub text: TextInput,
    /// Target language code (e.g. "DE", "FR", "EN-US")
    pub target_lang: String,
    /// Source language code; auto-detected when omitted
    #[serde(default)]
    pub source_lang: Option<String>,
    /// Formality level (default, more, less, prefer_more, prefer_less)
    #[serde(default)]
    pub formality: Option<String>,
    /// Preserve formatting of the input
    #[serde(default)]
    pub preserve_formatting: Option<bool>,
    /// Tag handling mode (xml, html)
    #[serde(default)]
    pub tag_handling: Option<String>,
    /// Sentence splitting (0 = none, 1 = default, nonewlines)
    #[serde(default)]
    pub split_sentences: Option<String>,
}

impl TranslateTextParams {
    pub fn new(text: impl Into<TextInput>, target_lang: &str) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.to_string(),
            source_lang: None,
            formality: None,
            preserve_formatting: None,
            tag_handling: None,
            split_sentences: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TranslateWithGlossaryParams {
    /// Text to translate (string or list of strings)
    pub text: TextInput,
    /// Target language code; must match the glossary's target language
    pub target_lang: String,
    /// Glossary id returned by create_glossary or list_glossaries
    pub glossary_id: String,
    /// Source language code; must match the glossary's source language
    #[serde(default)]
    pub source_lang: Option<String>,
    /// Formality level
    #[serde(default)]
    pub formality: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DetectLanguageParams {
    /// Text whose language should be detected
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    Source,
    #[default]
    Target,
}

impl LanguageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageType::Source => "source",
            LanguageType::Target => "target",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ListLanguagesParams {
    /// Which languages to list (source or target)
    #[serde(default)]
    pub language_type: LanguageType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntriesFormat {
    #[default]
    Tsv,
    Csv,
}

impl EntriesFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntriesFormat::Tsv => "tsv",
            EntriesFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateGlossaryParams {
    /// Glossary name
    pub name: String,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Mapping of source term to target term
    pub entries: BTreeMap<String, String>,
    /// Upload encoding of the entries (tsv or csv)
    #[serde(default)]
    pub entries_format: EntriesFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GlossaryIdParams {
    /// Glossary id
    pub glossary_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TranslateDocumentParams {
    /// Local path of the document (PDF, DOCX, PPTX, ...)
    pub document_path: String,
    /// Target language code
    pub target_lang: String,
    /// Source language code; auto-detected when omitted
    #[serde(default)]
    pub source_lang: Option<String>,
    /// Formality level
    #[serde(default)]
    pub formality: Option<String>,
    /// File name reported to DeepL for format detection; defaults to the path's file name
    #[serde(default)]
    pub filename: Option<String>,
    /// Glossary id to apply
    #[serde(default)]
    pub glossary_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DocumentHandleParams {
    /// Document id returned by translate_document
    pub document_id: String,
    /// Document key returned by translate_document
    pub document_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DownloadDocumentParams {
    /// Document id returned by translate_document
    pub document_id: String,
    /// Document key returned by translate_document
    pub document_key: String,
    /// Where to save the translated document; returned inline as base64 when omitted
    #[serde(default)]
    pub output_path: Option<String>,
}

/// Tools without arguments.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct NoParams {}
