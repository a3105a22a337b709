// DeepL REST API client
// Author: kelexine (https://github.com/kelexine)

use super::{server_url_for_key, DeepLApi};
use crate::config::DeepLConfig;
use crate::error::{DeepLError, Result};
use crate::models::deepl::{
    CreateGlossaryRequest, DocumentUpload, GlossaryList, TranslateRequest, TranslateResponse,
    WireDocumentHandle, WireDocumentStatus, WireError, WireGlossary, WireLanguage, WireUsage,
};
use crate::models::LanguageType;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};
use zeroize::Zeroizing;

/// Client for the DeepL REST API (v2).
///
/// Holds one pooled HTTP client and the authentication key. Timeouts are
/// the HTTP client's defaults. No request is ever retried here.
pub struct DeepLClient {
    http_client: Client,
    api_key: Zeroizing<String>,
    base_url: String,
}

impl std::fmt::Debug for DeepLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DeepLClient {
    /// Create a client. The endpoint comes from `config.server_url` when set,
    /// otherwise from the key's tier suffix.
    pub fn new(api_key: Zeroizing<String>, config: &DeepLConfig) -> Result<Self> {
        let http_client = Client::builder()
            .use_rustls_tls()
            .user_agent(concat!("mcp-deepl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DeepLError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config
            .server_url
            .clone()
            .unwrap_or_else(|| server_url_for_key(&api_key).to_string())
            .trim_end_matches('/')
            .to_string();

        debug!("Created DeepL client for {}", base_url);

        Ok(Self {
            http_client,
            api_key,
            base_url,
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a resource under `collection`, with the id as one encoded path segment.
    fn resource_url(&self, collection: &str, id: &str, suffix: &str) -> Result<String> {
        Ok(self.url(&format!("{}/{}{}", collection, path_segment(id)?, suffix)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", format!("DeepL-Auth-Key {}", self.api_key.as_str()))
    }

    /// Send a request and return the response if it succeeded.
    async fn send(&self, endpoint: &str, builder: RequestBuilder) -> Result<Response> {
        let response = self.authorized(builder).send().await.map_err(|e| {
            crate::metrics::record_deepl_call(endpoint, 0);
            error!("DeepL request to {} failed: {}", endpoint, e);
            DeepLError::Network(e.to_string())
        })?;

        let status = response.status();
        crate::metrics::record_deepl_call(endpoint, status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::extract_error_message(&body).unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body.clone()
            }
        });
        error!(
            "DeepL API error on {}: HTTP {} - {}",
            endpoint,
            status,
            crate::utils::logging::sanitize(&message)
        );

        Err(DeepLError::from_status(status.as_u16(), message))
    }

    async fn send_json<T: DeserializeOwned>(&self, endpoint: &str, builder: RequestBuilder) -> Result<T> {
        let response = self.send(endpoint, builder).await?;
        let text = response
            .text()
            .await
            .map_err(|e| DeepLError::Network(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse DeepL response from {}: {}", endpoint, e);
            DeepLError::Provider {
                status: 200,
                message: format!("Response parsing error: {}", e),
            }
        })
    }

    /// Extract error message from a DeepL error body
    fn extract_error_message(body: &str) -> Option<String> {
        let parsed: WireError = serde_json::from_str(body).ok()?;
        match (parsed.message, parsed.detail) {
            (Some(message), Some(detail)) => Some(format!("{}: {}", message, detail)),
            (Some(message), None) => Some(message),
            (None, detail) => detail,
        }
    }
}

/// Percent-encode an id so `/`, `?` and `#` stay inside the segment.
///
/// `.` and `..` are rejected: URL normalization would resolve them (encoded
/// or not) to a different resource.
fn path_segment(id: &str) -> Result<String> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(DeepLError::InvalidParameter(format!(
            "'{}' is not a valid resource id",
            id
        )));
    }
    Ok(urlencoding::encode(id).into_owned())
}

#[async_trait]
impl DeepLApi for DeepLClient {
    async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse> {
        debug!(
            "Translating {} text(s) to {}",
            request.text.len(),
            request.target_lang
        );
        let builder = self.http_client.post(self.url("/v2/translate")).json(&request);
        self.send_json("translate", builder).await
    }

    async fn languages(&self, language_type: LanguageType) -> Result<Vec<WireLanguage>> {
        let builder = self
            .http_client
            .get(self.url("/v2/languages"))
            .query(&[("type", language_type.as_str())]);
        self.send_json("languages", builder).await
    }

    async fn usage(&self) -> Result<WireUsage> {
        let builder = self.http_client.get(self.url("/v2/usage"));
        self.send_json("usage", builder).await
    }

    async fn list_glossaries(&self) -> Result<GlossaryList> {
        let builder = self.http_client.get(self.url("/v2/glossaries"));
        self.send_json("glossaries", builder).await
    }

    async fn create_glossary(&self, request: CreateGlossaryRequest) -> Result<WireGlossary> {
        debug!(
            "Creating glossary '{}' ({} -> {})",
            request.name, request.source_lang, request.target_lang
        );
        let builder = self.http_client.post(self.url("/v2/glossaries")).json(&request);
        self.send_json("glossaries", builder).await
    }

    async fn get_glossary(&self, glossary_id: &str) -> Result<WireGlossary> {
        let builder = self
            .http_client
            .get(self.resource_url("/v2/glossaries", glossary_id, "")?);
        self.send_json("glossary", builder).await
    }

    async fn delete_glossary(&self, glossary_id: &str) -> Result<()> {
        let builder = self
            .http_client
            .delete(self.resource_url("/v2/glossaries", glossary_id, "")?);
        self.send("glossary", builder).await?;
        Ok(())
    }

    async fn upload_document(&self, upload: DocumentUpload) -> Result<WireDocumentHandle> {
        debug!(
            "Uploading document '{}' ({} bytes) for translation to {}",
            upload.filename,
            upload.content.len(),
            upload.target_lang
        );

        let file = multipart::Part::bytes(upload.content).file_name(upload.filename.clone());
        let mut form = multipart::Form::new()
            .part("file", file)
            .text("filename", upload.filename)
            .text("target_lang", upload.target_lang);
        if let Some(source_lang) = upload.source_lang {
            form = form.text("source_lang", source_lang);
        }
        if let Some(formality) = upload.formality {
            form = form.text("formality", formality);
        }
        if let Some(glossary_id) = upload.glossary_id {
            form = form.text("glossary_id", glossary_id);
        }

        let builder = self.http_client.post(self.url("/v2/document")).multipart(form);
        self.send_json("document", builder).await
    }

    async fn document_status(&self, document_id: &str, document_key: &str) -> Result<WireDocumentStatus> {
        let builder = self
            .http_client
            .post(self.resource_url("/v2/document", document_id, "")?)
            .json(&json!({ "document_key": document_key }));
        self.send_json("document_status", builder).await
    }

    async fn download_document(&self, document_id: &str, document_key: &str) -> Result<Bytes> {
        let builder = self
            .http_client
            .post(self.resource_url("/v2/document", document_id, "/result")?)
            .json(&json!({ "document_key": document_key }));

        // DeepL answers 503 until the translated document is available
        let response = match self.send("document_result", builder).await {
            Err(DeepLError::Provider { status: 503, message }) => {
                return Err(DeepLError::DocumentNotReady(message));
            }
            other => other?,
        };

        response
            .bytes()
            .await
            .map_err(|e| DeepLError::Network(format!("Failed to read document body: {}", e)))
    }
}
