use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::{ApiDocumentDraft, BodyType, HttpMethod, Pair, TokenConfig, TokenMethod};

/// Finalized, immutable API document produced by a successful submit.
///
/// This is the handoff payload for the executor that will perform token
/// acquisition and issue the configured call; field names and shapes match
/// the form's submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    pub api_name: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<Pair>,
    pub token_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_config: Option<TokenDocument>,
    pub response_config: Vec<Pair>,
    pub request_body_type: BodyType,
    pub request_body: String,
    pub form_data: Vec<Pair>,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

/// Token acquisition settings in wire shape: the payload is split back
/// into a body type and an untagged body (text or pair list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDocument {
    pub token_url: String,
    pub token_method: TokenMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_body_type: Option<BodyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_body: Option<TokenBodyRepr>,
    pub token_response_path: String,
}

/// Wire shape of the token body: text for json/raw, pairs for form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenBodyRepr {
    Text(String),
    Pairs(Vec<Pair>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub submitted_at: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            submitted_at: Utc::now().to_rfc3339(),
        }
    }
}

impl From<&ApiDocumentDraft> for ApiDocument {
    fn from(draft: &ApiDocumentDraft) -> Self {
        Self {
            api_name: draft.api_name.clone(),
            url: draft.url.clone(),
            method: draft.method,
            headers: draft.headers.clone(),
            token_required: draft.token_required,
            token_config: draft.token_config.as_ref().map(TokenDocument::from),
            response_config: draft.response_config.clone(),
            request_body_type: draft.request_body_type,
            request_body: draft.request_body.clone(),
            form_data: draft.form_data.clone(),
            metadata: DocumentMetadata::default(),
        }
    }
}

impl From<&TokenConfig> for TokenDocument {
    fn from(config: &TokenConfig) -> Self {
        let token_body = config.body.as_ref().map(|payload| match payload.pairs() {
            Some(pairs) => TokenBodyRepr::Pairs(pairs.to_vec()),
            None => TokenBodyRepr::Text(payload.text().unwrap_or_default().to_string()),
        });

        Self {
            token_url: config.token_url.clone(),
            token_method: config.token_method,
            token_body_type: config.body.as_ref().map(|payload| payload.body_type()),
            token_body,
            token_response_path: config.token_response_path.clone(),
        }
    }
}

/// Receiver for finalized documents, implemented by the API executor.
pub trait DocumentSink {
    fn accept(&mut self, document: ApiDocument);
}
