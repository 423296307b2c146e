//! Draft validation.
//!
//! All rules are evaluated on every run and the full error set is returned,
//! keyed by field path in the form's addressing scheme (`api_name`,
//! `headers[0].key`, `token_config.token_url`, ...). Invalid input is an
//! expected outcome, so errors are values, never panics.

use std::collections::BTreeMap;

use crate::types::{ApiDocumentDraft, BodyType, TokenMethod, TokenPayload};

pub const REQUIRED: &str = "Required";
pub const AT_LEAST_ONE_FORM_FIELD: &str = "At least one form data field is required";

/// Field errors keyed by path, in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(path, message)| (path.as_str(), message.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(path.into(), message.into());
    }
}

impl FromIterator<(String, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (path, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", path, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a draft against the full rule set. Pure: the draft is not
/// mutated and repeated calls yield the same error set.
pub fn validate(draft: &ApiDocumentDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.api_name.trim().is_empty() {
        errors.insert("api_name", REQUIRED);
    }
    if draft.url.trim().is_empty() {
        errors.insert("url", REQUIRED);
    }

    for (index, header) in draft.headers.iter().enumerate() {
        if header.key.trim().is_empty() {
            errors.insert(format!("headers[{index}].key"), REQUIRED);
        }
    }

    if draft.token_required {
        match &draft.token_config {
            Some(config) => validate_token_config(config, &mut errors),
            // The controller keeps the config present while the toggle is
            // on; a hand-built draft can still violate that.
            None => errors.insert("token_config", REQUIRED),
        }
    }

    for (index, entry) in draft.response_config.iter().enumerate() {
        if entry.key.trim().is_empty() {
            errors.insert(format!("response_config[{index}].key"), REQUIRED);
        }
    }

    // The original form required the body text for every non-GET method
    // without consulting the body type, so a form-data request still needs
    // the text filled in. Reproduced as-is; see DESIGN.md.
    if draft.method.requires_body() && draft.request_body.trim().is_empty() {
        errors.insert("request_body", REQUIRED);
    }

    if draft.request_body_type == BodyType::FormData {
        if draft.form_data.is_empty() {
            errors.insert("form_data", AT_LEAST_ONE_FORM_FIELD);
        } else {
            for (index, field) in draft.form_data.iter().enumerate() {
                if field.key.trim().is_empty() {
                    errors.insert(format!("form_data[{index}].key"), REQUIRED);
                }
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_token_config(config: &crate::types::TokenConfig, errors: &mut ValidationErrors) {
    if config.token_url.trim().is_empty() {
        errors.insert("token_config.token_url", REQUIRED);
    }
    if config.token_response_path.trim().is_empty() {
        errors.insert("token_config.token_response_path", REQUIRED);
    }

    // Body rules only apply when the token endpoint is not called with GET.
    if config.token_method == TokenMethod::GET {
        return;
    }

    match &config.body {
        None => errors.insert("token_config.token_body_type", REQUIRED),
        Some(TokenPayload::Json(text)) | Some(TokenPayload::Raw(text)) => {
            if text.trim().is_empty() {
                errors.insert("token_config.token_body", REQUIRED);
            }
        }
        Some(TokenPayload::FormData(pairs)) => {
            for (index, pair) in pairs.iter().enumerate() {
                if pair.key.trim().is_empty() {
                    errors.insert(format!("token_config.token_body[{index}].key"), REQUIRED);
                }
            }
        }
    }
}
