//! The DeepL adapter: one async operation per tool.
//!
//! Each operation validates its inputs, performs a single DeepL round trip
//! through the injected [`DeepLApi`], and maps the wire response into a
//! typed record. Provider errors are returned as-is; nothing is retried,
//! cached or persisted. Document translation is driven by the caller via
//! the `(document_id, document_key)` pair returned by
//! [`DeepLAdapter::translate_document`].
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod request;
pub mod response;

use crate::deepl::DeepLApi;
use crate::error::{DeepLError, Result};
use crate::models::deepl::DocumentUpload;
use crate::models::{
    CreateGlossaryParams, DocumentJob, GlossaryDeletion, GlossaryInfo, GlossaryList, LanguageDetection,
    LanguageList, LanguageType, TranslateDocumentParams, TranslateTextParams, TranslateWithGlossaryParams,
    TranslationOutput, UsageStats,
};
use bytes::Bytes;
use request::require;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct DeepLAdapter {
    api: Arc<dyn DeepLApi>,
}

impl DeepLAdapter {
    pub fn new(api: Arc<dyn DeepLApi>) -> Self {
        Self { api }
    }

    pub async fn translate_text(&self, params: TranslateTextParams) -> Result<TranslationOutput> {
        let request = request::build_translate_request(params)?;
        let expected = request.text.len();
        let response = self.api.translate(request).await?;

        Ok(TranslationOutput {
            translations: response::map_translations(response, expected)?,
        })
    }

    /// Translate with a glossary. A glossary whose language pair does not
    /// match the request is rejected by DeepL and reported unchanged.
    pub async fn translate_with_glossary(&self, params: TranslateWithGlossaryParams) -> Result<TranslationOutput> {
        let request = request::build_glossary_translate_request(params)?;
        let expected = request.text.len();
        let response = self.api.translate(request).await?;

        Ok(TranslationOutput {
            translations: response::map_translations(response, expected)?,
        })
    }

    /// Detect the language of `text` by translating a sample of it.
    pub async fn detect_language(&self, text: &str) -> Result<LanguageDetection> {
        let request = request::build_detection_request(text)?;
        let response = self.api.translate(request).await?;
        let detected = response::map_translations(response, 1)?
            .into_iter()
            .next()
            .map(|t| t.detected_source_lang)
            .ok_or_else(|| DeepLError::Provider {
                status: 200,
                message: "DeepL returned no translation".to_string(),
            })?;

        Ok(LanguageDetection {
            detected_language: detected,
            confidence: None,
            text: request::detection_preview(text),
        })
    }

    pub async fn list_languages(&self, language_type: LanguageType) -> Result<LanguageList> {
        let languages = self
            .api
            .languages(language_type)
            .await?
            .into_iter()
            .map(|l| response::map_language(l, language_type))
            .collect::<Result<Vec<_>>>()?;

        Ok(LanguageList { languages })
    }

    pub async fn get_usage(&self) -> Result<UsageStats> {
        response::map_usage(self.api.usage().await?)
    }

    pub async fn list_glossaries(&self) -> Result<GlossaryList> {
        let glossaries = self
            .api
            .list_glossaries()
            .await?
            .glossaries
            .into_iter()
            .map(response::map_glossary)
            .collect::<Result<Vec<_>>>()?;

        Ok(GlossaryList { glossaries })
    }

    pub async fn create_glossary(&self, params: CreateGlossaryParams) -> Result<GlossaryInfo> {
        let request = request::build_glossary_request(params)?;
        let glossary = response::map_glossary(self.api.create_glossary(request).await?)?;
        info!("Created glossary {} ({} entries)", glossary.glossary_id, glossary.entry_count);
        Ok(glossary)
    }

    pub async fn get_glossary(&self, glossary_id: &str) -> Result<GlossaryInfo> {
        let glossary_id = require("glossary_id", glossary_id)?;
        response::map_glossary(self.api.get_glossary(&glossary_id).await?)
    }

    pub async fn delete_glossary(&self, glossary_id: &str) -> Result<GlossaryDeletion> {
        let glossary_id = require("glossary_id", glossary_id)?;
        self.api.delete_glossary(&glossary_id).await?;
        info!("Deleted glossary {}", glossary_id);

        Ok(GlossaryDeletion {
            success: true,
            glossary_id,
        })
    }

    /// Upload a local document for translation. The returned job is queued;
    /// poll it with [`DeepLAdapter::get_document_status`].
    pub async fn translate_document(&self, params: TranslateDocumentParams) -> Result<DocumentJob> {
        let document_path = require("document_path", &params.document_path)?;
        let target_lang = require("target_lang", &params.target_lang)?;

        let filename = params
            .filename
            .filter(|f| !f.trim().is_empty())
            .or_else(|| {
                Path::new(&document_path)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .ok_or_else(|| {
                DeepLError::InvalidParameter(format!("cannot derive a file name from {}", document_path))
            })?;

        let content = tokio::fs::read(&document_path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                DeepLError::InvalidParameter(format!("Document not found: {}", document_path))
            }
            _ => DeepLError::Io(e),
        })?;

        debug!("Read {} bytes from {}", content.len(), document_path);

        let upload = DocumentUpload {
            content,
            filename,
            target_lang,
            source_lang: params.source_lang.filter(|s| !s.trim().is_empty()),
            formality: params.formality.filter(|s| !s.trim().is_empty()),
            glossary_id: params.glossary_id.filter(|s| !s.trim().is_empty()),
        };

        let job = response::map_upload(self.api.upload_document(upload).await?)?;
        info!("Submitted document {} for translation", job.document_id);
        Ok(job)
    }

    /// Poll a document job once. Poll cadence is up to the caller.
    pub async fn get_document_status(&self, document_id: &str, document_key: &str) -> Result<DocumentJob> {
        let document_id = require("document_id", document_id)?;
        let document_key = require("document_key", document_key)?;
        let status = self.api.document_status(&document_id, &document_key).await?;
        response::map_document_status(status, &document_id, &document_key)
    }

    /// Fetch the translated document. Fails with `DocumentNotReady` until the
    /// job is done.
    pub async fn download_translated_document(&self, document_id: &str, document_key: &str) -> Result<Bytes> {
        let document_id = require("document_id", document_id)?;
        let document_key = require("document_key", document_key)?;
        let content = self.api.download_document(&document_id, &document_key).await?;
        debug!("Downloaded {} bytes for document {}", content.len(), document_id);
        Ok(content)
    }
}
