// Response mapping (DeepL wire models → typed records)
// Author: kelexine (https://github.com/kelexine)
//
// Every required field is checked; a missing one fails the call instead of
// producing a partially filled record.

use crate::error::{DeepLError, Result};
use crate::models::deepl::{
    TranslateResponse, WireDocumentHandle, WireDocumentStatus, WireGlossary, WireLanguage, WireUsage,
};
use crate::models::{
    CharacterLimit, DocumentJob, DocumentStatus, GlossaryInfo, LanguageInfo, LanguageType,
    TranslationResult, UsageStats,
};

fn required<T>(record: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| DeepLError::Provider {
        status: 200,
        message: format!("DeepL {} response is missing '{}'", record, field),
    })
}

pub fn map_translations(response: TranslateResponse, expected: usize) -> Result<Vec<TranslationResult>> {
    if response.translations.len() != expected {
        return Err(DeepLError::Provider {
            status: 200,
            message: format!(
                "DeepL returned {} translations for {} texts",
                response.translations.len(),
                expected
            ),
        });
    }

    response
        .translations
        .into_iter()
        .map(|t| {
            Ok(TranslationResult {
                translated_text: required("translation", "text", t.text)?,
                detected_source_lang: required(
                    "translation",
                    "detected_source_language",
                    t.detected_source_language,
                )?,
                billed_characters: required("translation", "billed_characters", t.billed_characters)?,
            })
        })
        .collect()
}

pub fn map_language(language: WireLanguage, language_type: LanguageType) -> Result<LanguageInfo> {
    let supports_formality = match language_type {
        LanguageType::Target => Some(language.supports_formality.unwrap_or(false)),
        LanguageType::Source => None,
    };

    Ok(LanguageInfo {
        code: required("language", "language", language.language)?,
        name: required("language", "name", language.name)?,
        supports_formality,
    })
}

pub fn map_usage(usage: WireUsage) -> Result<UsageStats> {
    Ok(UsageStats {
        character_count: required("usage", "character_count", usage.character_count)?,
        character_limit: CharacterLimit::from_raw(required(
            "usage",
            "character_limit",
            usage.character_limit,
        )?),
        document_count: usage.document_count,
        document_limit: usage.document_limit,
        team_document_count: usage.team_document_count,
        team_document_limit: usage.team_document_limit,
    })
}

pub fn map_glossary(glossary: WireGlossary) -> Result<GlossaryInfo> {
    Ok(GlossaryInfo {
        glossary_id: required("glossary", "glossary_id", glossary.glossary_id)?,
        name: required("glossary", "name", glossary.name)?,
        source_lang: required("glossary", "source_lang", glossary.source_lang)?,
        target_lang: required("glossary", "target_lang", glossary.target_lang)?,
        entry_count: required("glossary", "entry_count", glossary.entry_count)?,
        ready: required("glossary", "ready", glossary.ready)?,
        creation_time: glossary.creation_time,
    })
}

/// A freshly uploaded document is always queued.
pub fn map_upload(handle: WireDocumentHandle) -> Result<DocumentJob> {
    Ok(DocumentJob {
        document_id: required("document", "document_id", handle.document_id)?,
        document_key: required("document", "document_key", handle.document_key)?,
        status: DocumentStatus::Queued,
        seconds_remaining: None,
        billed_characters: None,
        error_message: None,
    })
}

/// The key is never echoed by DeepL; the caller-supplied one is carried over.
pub fn map_document_status(status: WireDocumentStatus, document_id: &str, document_key: &str) -> Result<DocumentJob> {
    let raw = required("document status", "status", status.status)?;
    let parsed = DocumentStatus::parse(&raw).ok_or_else(|| DeepLError::Provider {
        status: 200,
        message: format!("DeepL reported unknown document status '{}'", raw),
    })?;

    Ok(DocumentJob {
        document_id: status.document_id.unwrap_or_else(|| document_id.to_string()),
        document_key: document_key.to_string(),
        status: parsed,
        seconds_remaining: status.seconds_remaining,
        billed_characters: status.billed_characters,
        error_message: status.error_message,
    })
}
