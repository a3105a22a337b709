// DeepL API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::DeepLClient;

use crate::error::Result;
use crate::models::deepl::{
    CreateGlossaryRequest, DocumentUpload, GlossaryList, TranslateRequest, TranslateResponse,
    WireDocumentHandle, WireDocumentStatus, WireGlossary, WireLanguage, WireUsage,
};
use crate::models::LanguageType;
use async_trait::async_trait;
use bytes::Bytes;

/// Endpoint for keys on the free tier (suffix `:fx`).
pub const FREE_API_URL: &str = "https://api-free.deepl.com";

/// Endpoint for paid-tier keys.
pub const PRO_API_URL: &str = "https://api.deepl.com";

/// Pick the DeepL endpoint for an API key.
pub fn server_url_for_key(api_key: &str) -> &'static str {
    if api_key.trim_end().ends_with(":fx") {
        FREE_API_URL
    } else {
        PRO_API_URL
    }
}

/// The DeepL REST surface the adapter depends on.
///
/// Every method is exactly one network round trip. Implemented by
/// [`DeepLClient`] against the real API and by in-memory fakes in tests.
#[async_trait]
pub trait DeepLApi: Send + Sync {
    async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse>;

    async fn languages(&self, language_type: LanguageType) -> Result<Vec<WireLanguage>>;

    async fn usage(&self) -> Result<WireUsage>;

    async fn list_glossaries(&self) -> Result<GlossaryList>;

    async fn create_glossary(&self, request: CreateGlossaryRequest) -> Result<WireGlossary>;

    async fn get_glossary(&self, glossary_id: &str) -> Result<WireGlossary>;

    async fn delete_glossary(&self, glossary_id: &str) -> Result<()>;

    async fn upload_document(&self, upload: DocumentUpload) -> Result<WireDocumentHandle>;

    async fn document_status(&self, document_id: &str, document_key: &str) -> Result<WireDocumentStatus>;

    async fn download_document(&self, document_id: &str, document_key: &str) -> Result<Bytes>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_key_selects_free_endpoint() {
        assert_eq!(server_url_for_key("0b5c9a1e-1234-4e5f-9abc-0123456789ab:fx"), FREE_API_URL);
    }

    #[test]
    fn test_pro_key_selects_pro_endpoint() {
        assert_eq!(server_url_for_key("0b5c9a1e-1234-4e5f-9abc-0123456789ab"), PRO_API_URL);
        assert_eq!(server_url_for_key("key:fxx"), PRO_API_URL);
    }
}
