// Request building (tool parameters → DeepL wire requests)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{DeepLError, Result};
use crate::models::deepl::{CreateGlossaryRequest, TranslateRequest};
use crate::models::{
    CreateGlossaryParams, EntriesFormat, TextInput, TranslateTextParams, TranslateWithGlossaryParams,
};
use std::collections::BTreeMap;

/// Pivot language used for detection, since DeepL has no detect endpoint.
pub const DETECTION_TARGET_LANG: &str = "EN-US";

/// Characters of input sent for detection.
pub const DETECTION_SAMPLE_CHARS: usize = 1000;

/// Characters of input echoed back in the detection result.
pub const DETECTION_PREVIEW_CHARS: usize = 100;

/// Reject a missing or blank required string, returning it trimmed.
pub fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DeepLError::InvalidParameter(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Blank optional strings are treated as absent.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn texts(input: TextInput) -> Result<Vec<String>> {
    let texts = input.into_vec();
    if texts.is_empty() {
        return Err(DeepLError::InvalidParameter(
            "text must contain at least one entry".to_string(),
        ));
    }
    Ok(texts)
}

/// Build a translate request. Only presence is checked locally; language
/// codes and formality are validated by DeepL.
pub fn build_translate_request(params: TranslateTextParams) -> Result<TranslateRequest> {
    let target_lang = require("target_lang", &params.target_lang)?;
    let text = texts(params.text)?;

    Ok(TranslateRequest {
        text,
        target_lang,
        source_lang: optional(params.source_lang),
        formality: optional(params.formality),
        preserve_formatting: params.preserve_formatting,
        tag_handling: optional(params.tag_handling),
        split_sentences: optional(params.split_sentences),
        glossary_id: None,
        show_billed_characters: true,
    })
}

pub fn build_glossary_translate_request(params: TranslateWithGlossaryParams) -> Result<TranslateRequest> {
    let target_lang = require("target_lang", &params.target_lang)?;
    let glossary_id = require("glossary_id", &params.glossary_id)?;
    let text = texts(params.text)?;

    Ok(TranslateRequest {
        text,
        target_lang,
        source_lang: optional(params.source_lang),
        formality: optional(params.formality),
        glossary_id: Some(glossary_id),
        show_billed_characters: true,
        ..TranslateRequest::default()
    })
}

pub fn build_detection_request(text: &str) -> Result<TranslateRequest> {
    if text.trim().is_empty() {
        return Err(DeepLError::InvalidParameter("text is required".to_string()));
    }

    Ok(TranslateRequest {
        text: vec![text.chars().take(DETECTION_SAMPLE_CHARS).collect()],
        target_lang: DETECTION_TARGET_LANG.to_string(),
        show_billed_characters: true,
        ..TranslateRequest::default()
    })
}

/// Shorten text for echoing back in a detection result.
pub fn detection_preview(text: &str) -> String {
    if text.chars().count() > DETECTION_PREVIEW_CHARS {
        let head: String = text.chars().take(DETECTION_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

pub fn build_glossary_request(params: CreateGlossaryParams) -> Result<CreateGlossaryRequest> {
    let name = require("name", &params.name)?;
    let source_lang = require("source_lang", &params.source_lang)?;
    let target_lang = require("target_lang", &params.target_lang)?;
    if params.entries.is_empty() {
        return Err(DeepLError::InvalidParameter(
            "entries must contain at least one term".to_string(),
        ));
    }

    Ok(CreateGlossaryRequest {
        name,
        source_lang,
        target_lang,
        entries: encode_entries(&params.entries, params.entries_format)?,
        entries_format: params.entries_format.as_str().to_string(),
    })
}

/// Encode glossary entries one pair per line, terms copied verbatim.
pub fn encode_entries(entries: &BTreeMap<String, String>, format: EntriesFormat) -> Result<String> {
    let mut lines = Vec::with_capacity(entries.len());
    for (source, target) in entries {
        for term in [source, target] {
            if term.contains(['\t', '\n', '\r']) {
                return Err(DeepLError::InvalidParameter(format!(
                    "glossary term {:?} contains a tab or line break",
                    term
                )));
            }
        }
        let line = match format {
            EntriesFormat::Tsv => format!("{}\t{}", source, target),
            EntriesFormat::Csv => format!("{},{}", csv_field(source), csv_field(target)),
        };
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn csv_field(term: &str) -> String {
    if term.contains([',', '"']) {
        format!("\"{}\"", term.replace('"', "\"\""))
    } else {
        term.to_string()
    }
}
