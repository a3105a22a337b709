// In-memory DeepL fake shared by the integration tests
// Author: kelexine (https://github.com/kelexine)
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use mcp_deepl::adapter::DeepLAdapter;
use mcp_deepl::deepl::DeepLApi;
use mcp_deepl::error::{DeepLError, Result};
use mcp_deepl::mcp::{McpHandler, ToolRegistry};
use mcp_deepl::models::deepl::{
    CreateGlossaryRequest, DocumentUpload, GlossaryList, TranslateRequest, TranslateResponse,
    WireDocumentHandle, WireDocumentStatus, WireGlossary, WireLanguage, WireTranslation, WireUsage,
};
use mcp_deepl::models::LanguageType;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Target languages with their formality support, as published by DeepL.
pub const TARGET_LANGUAGES: &[(&str, &str, bool)] = &[
    ("DE", "German", true),
    ("EN-GB", "English (British)", false),
    ("EN-US", "English (American)", false),
    ("ES", "Spanish", true),
    ("FR", "French", true),
    ("JA", "Japanese", true),
    ("ZH", "Chinese (simplified)", false),
];

pub const SOURCE_LANGUAGES: &[(&str, &str)] = &[
    ("DE", "German"),
    ("EN", "English"),
    ("ES", "Spanish"),
    ("FR", "French"),
    ("JA", "Japanese"),
];

/// Status polls a document needs before it reports `done`.
pub const POLLS_UNTIL_DONE: usize = 3;

struct FakeDocument {
    key: String,
    filename: String,
    polls: usize,
}

/// A DeepL stand-in that counts every provider call.
#[derive(Default)]
pub struct FakeDeepL {
    calls: AtomicUsize,
    glossaries: Mutex<HashMap<String, WireGlossary>>,
    documents: Mutex<HashMap<String, FakeDocument>>,
    next_id: AtomicUsize,
    usage_delay: Option<Duration>,
    pub last_translate: Mutex<Option<TranslateRequest>>,
    pub last_glossary: Mutex<Option<CreateGlossaryRequest>>,
}

impl FakeDeepL {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A fake whose `usage` call takes `delay` to answer.
    pub fn with_slow_usage(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            usage_delay: Some(delay),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn fake_translation(text: &str, target_lang: &str) -> String {
        match (text, target_lang) {
            ("Hello world", "DE") => "Hallo Welt".to_string(),
            ("smartphone app", "DE") => "Smartphone-App".to_string(),
            _ => format!("[{}] {}", target_lang, text),
        }
    }
}

#[async_trait]
impl DeepLApi for FakeDeepL {
    async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse> {
        self.hit();
        *self.last_translate.lock() = Some(request.clone());

        if let Some(glossary_id) = &request.glossary_id {
            let glossaries = self.glossaries.lock();
            let glossary = glossaries
                .get(glossary_id)
                .ok_or_else(|| DeepLError::NotFound("Glossary not found".to_string()))?;
            let source = request.source_lang.as_deref().ok_or_else(|| DeepLError::Provider {
                status: 400,
                message: "Use of a glossary requires the source_lang parameter to be set".to_string(),
            })?;
            let source = source.to_lowercase();
            let target = request.target_lang.to_lowercase();
            if glossary.source_lang.as_deref() != Some(source.as_str())
                || glossary.target_lang.as_deref() != Some(target.as_str())
            {
                return Err(DeepLError::Provider {
                    status: 400,
                    message: "Language pair of the glossary doesn't match the request".to_string(),
                });
            }
        }

        if !TARGET_LANGUAGES.iter().any(|(code, _, _)| *code == request.target_lang) && request.target_lang != "EN" {
            return Err(DeepLError::Provider {
                status: 400,
                message: "Value for 'target_lang' not supported.".to_string(),
            });
        }

        let translations = request
            .text
            .iter()
            .map(|text| WireTranslation {
                detected_source_language: Some("EN".to_string()),
                text: Some(Self::fake_translation(text, &request.target_lang)),
                billed_characters: Some(text.chars().count() as u64),
            })
            .collect();

        Ok(TranslateResponse { translations })
    }

    async fn languages(&self, language_type: LanguageType) -> Result<Vec<WireLanguage>> {
        self.hit();
        Ok(match language_type {
            LanguageType::Target => TARGET_LANGUAGES
                .iter()
                .map(|(code, name, formality)| WireLanguage {
                    language: Some(code.to_string()),
                    name: Some(name.to_string()),
                    supports_formality: Some(*formality),
                })
                .collect(),
            LanguageType::Source => SOURCE_LANGUAGES
                .iter()
                .map(|(code, name)| WireLanguage {
                    language: Some(code.to_string()),
                    name: Some(name.to_string()),
                    supports_formality: None,
                })
                .collect(),
        })
    }

    async fn usage(&self) -> Result<WireUsage> {
        self.hit();
        if let Some(delay) = self.usage_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(WireUsage {
            character_count: Some(123_456),
            character_limit: Some(500_000),
            document_count: None,
            document_limit: None,
            team_document_count: None,
            team_document_limit: None,
        })
    }

    async fn list_glossaries(&self) -> Result<GlossaryList> {
        self.hit();
        let mut glossaries: Vec<WireGlossary> = self.glossaries.lock().values().cloned().collect();
        glossaries.sort_by(|a, b| a.glossary_id.cmp(&b.glossary_id));
        Ok(GlossaryList { glossaries })
    }

    async fn create_glossary(&self, request: CreateGlossaryRequest) -> Result<WireGlossary> {
        self.hit();
        *self.last_glossary.lock() = Some(request.clone());

        let glossary = WireGlossary {
            glossary_id: Some(self.id("gls")),
            name: Some(request.name.clone()),
            ready: Some(true),
            source_lang: Some(request.source_lang.to_lowercase()),
            target_lang: Some(request.target_lang.to_lowercase()),
            creation_time: Some("2026-10-17T10:00:00.000000Z".to_string()),
            entry_count: Some(request.entries.lines().count() as u64),
        };
        let id = glossary.glossary_id.clone().unwrap_or_default();
        self.glossaries.lock().insert(id, glossary.clone());
        Ok(glossary)
    }

    async fn get_glossary(&self, glossary_id: &str) -> Result<WireGlossary> {
        self.hit();
        self.glossaries
            .lock()
            .get(glossary_id)
            .cloned()
            .ok_or_else(|| DeepLError::NotFound("Glossary not found".to_string()))
    }

    async fn delete_glossary(&self, glossary_id: &str) -> Result<()> {
        self.hit();
        self.glossaries
            .lock()
            .remove(glossary_id)
            .map(|_| ())
            .ok_or_else(|| DeepLError::NotFound("Glossary not found".to_string()))
    }

    async fn upload_document(&self, upload: DocumentUpload) -> Result<WireDocumentHandle> {
        self.hit();
        let id = self.id("doc");
        let key = format!("key-for-{}", id);
        self.documents.lock().insert(
            id.clone(),
            FakeDocument {
                key: key.clone(),
                filename: upload.filename,
                polls: 0,
            },
        );
        Ok(WireDocumentHandle {
            document_id: Some(id),
            document_key: Some(key),
        })
    }

    async fn document_status(&self, document_id: &str, document_key: &str) -> Result<WireDocumentStatus> {
        self.hit();
        let mut documents = self.documents.lock();
        let document = documents
            .get_mut(document_id)
            .filter(|d| d.key == document_key)
            .ok_or_else(|| DeepLError::NotFound("Document not found".to_string()))?;

        document.polls += 1;
        let (status, seconds_remaining) = match document.polls {
            1 => ("queued", None),
            n if n < POLLS_UNTIL_DONE => ("translating", Some(5)),
            _ => ("done", None),
        };

        Ok(WireDocumentStatus {
            document_id: Some(document_id.to_string()),
            status: Some(status.to_string()),
            seconds_remaining,
            billed_characters: (status == "done").then_some(42),
            error_message: None,
        })
    }

    async fn download_document(&self, document_id: &str, document_key: &str) -> Result<Bytes> {
        self.hit();
        let documents = self.documents.lock();
        let document = documents
            .get(document_id)
            .filter(|d| d.key == document_key)
            .ok_or_else(|| DeepLError::NotFound("Document not found".to_string()))?;

        if document.polls < POLLS_UNTIL_DONE {
            return Err(DeepLError::DocumentNotReady("Document translation is not finished".to_string()));
        }
        Ok(Bytes::from(format!("translated {}", document.filename)))
    }
}

pub fn adapter(fake: &Arc<FakeDeepL>) -> DeepLAdapter {
    DeepLAdapter::new(fake.clone())
}

pub fn handler(fake: &Arc<FakeDeepL>) -> McpHandler {
    McpHandler::new(ToolRegistry::new(adapter(fake)))
}
