//! The form state controller.
//!
//! Holds the one mutable [`ApiDocumentDraft`], applies typed field edits with
//! their side effects, derives which sub-sections of the form are visible,
//! and produces the immutable [`ApiDocument`] handoff on submit. Every edit
//! runs to completion before the next; there is no shared state beyond the
//! draft owned here.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::document::{ApiDocument, DocumentSink};
use crate::types::{
    ApiDocumentDraft, BodyType, HttpMethod, Pair, TokenConfig, TokenMethod, TokenPayload,
};
use crate::validate::{ValidationErrors, validate};

/// One user edit to the draft. This is the complete set of mutations the
/// form can perform; there is no free-form path-based write.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    ApiNameChanged(String),
    UrlChanged(String),
    MethodChanged(HttpMethod),
    HeaderKeyChanged(usize, String),
    HeaderValueChanged(usize, String),
    AddHeader,
    RemoveHeader(usize),
    TokenRequiredToggled(bool),
    TokenUrlChanged(String),
    TokenMethodChanged(TokenMethod),
    TokenBodyTypeChanged(BodyType),
    TokenBodyTextChanged(String),
    TokenBodyKeyChanged(usize, String),
    TokenBodyValueChanged(usize, String),
    AddTokenBodyField,
    RemoveTokenBodyField(usize),
    TokenResponsePathChanged(String),
    ResponseKeyChanged(usize, String),
    ResponseValueChanged(usize, String),
    AddResponseField,
    RemoveResponseField(usize),
    RequestBodyTypeChanged(BodyType),
    RequestBodyChanged(String),
    FormDataKeyChanged(usize, String),
    FormDataValueChanged(usize, String),
    AddFormDataField,
    RemoveFormDataField(usize),
}

/// The four pair lists an edit can address, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairList {
    Headers,
    TokenBody,
    ResponseConfig,
    FormData,
}

impl std::fmt::Display for PairList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairList::Headers => write!(f, "headers"),
            PairList::TokenBody => write!(f, "token_config.token_body"),
            PairList::ResponseConfig => write!(f, "response_config"),
            PairList::FormData => write!(f, "form_data"),
        }
    }
}

/// Caller defects. These are rejected with a descriptive error rather than
/// silently ignored; field-level validation failures are not errors here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{list} has no entry at index {index} (len {len})")]
    IndexOutOfRange {
        list: PairList,
        index: usize,
        len: usize,
    },

    #[error("token configuration is not present; toggle token_required on first")]
    TokenConfigAbsent,

    #[error("token body holds form data fields, not text")]
    TokenBodyNotText,

    #[error("token body does not hold form data fields")]
    TokenBodyNotFormData,
}

/// Which optional parts of the form are shown, derived from the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    /// The whole token acquisition section.
    pub token_config: bool,
    /// The token body type selector (hidden while the token method is GET).
    pub token_body_type: bool,
    /// The token body text editor (json/raw payload selected).
    pub token_body_text: bool,
    /// The token body pair-list editor (form data payload selected).
    pub token_body_pairs: bool,
    /// The request body text editor.
    pub request_body_text: bool,
    /// The request form-data pair-list editor.
    pub form_data: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    draft: ApiDocumentDraft,
    errors: ValidationErrors,
    touched: BTreeSet<String>,
}

impl FormController {
    pub fn new() -> Self {
        let draft = ApiDocumentDraft::new();
        let errors = validate(&draft).err().unwrap_or_default();
        Self {
            draft,
            errors,
            touched: BTreeSet::new(),
        }
    }

    /// Read-only view of the draft for the rendering layer.
    pub fn draft(&self) -> &ApiDocumentDraft {
        &self.draft
    }

    /// The full current error set, regardless of touched state.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_touched(&self, path: &str) -> bool {
        self.touched.contains(path)
    }

    /// Errors for fields the user has interacted with. This is what the
    /// rendering layer displays; untouched fields stay quiet.
    pub fn visible_errors(&self) -> ValidationErrors {
        self.errors
            .iter()
            .filter(|(path, _)| self.touched.contains(*path))
            .map(|(path, message)| (path.to_string(), message.to_string()))
            .collect()
    }

    pub fn visibility(&self) -> SectionVisibility {
        let token = self
            .draft
            .token_config
            .as_ref()
            .filter(|_| self.draft.token_required);
        let token_body = token.and_then(|config| config.body.as_ref());

        SectionVisibility {
            token_config: token.is_some(),
            token_body_type: token.is_some_and(|config| config.token_method != TokenMethod::GET),
            token_body_text: token.is_some_and(|config| config.token_method != TokenMethod::GET)
                && token_body.is_some_and(|body| body.text().is_some()),
            token_body_pairs: token_body.is_some_and(|body| body.pairs().is_some()),
            request_body_text: self.draft.request_body_type != BodyType::FormData,
            form_data: self.draft.request_body_type == BodyType::FormData,
        }
    }

    /// Apply one edit: mutate the draft, mark the edited field touched and
    /// re-validate. On error the draft is left untouched.
    pub fn update(&mut self, edit: Edit) -> Result<(), EditError> {
        debug!("applying edit {:?}", edit);
        let touched_path = self.apply(edit)?;
        self.touched.insert(touched_path);
        self.errors = validate(&self.draft).err().unwrap_or_default();
        Ok(())
    }

    /// Validate and finalize. On success the snapshot goes to the sink and
    /// the controller resets to a fresh draft; on failure every field is
    /// marked touched so all errors display, and the draft stays as-is.
    pub fn submit(&mut self, sink: &mut dyn DocumentSink) -> Result<(), ValidationErrors> {
        match validate(&self.draft) {
            Ok(()) => {
                let document = ApiDocument::from(&self.draft);
                match serde_json::to_string(&document) {
                    Ok(payload) => info!("submitting api document: {payload}"),
                    Err(err) => warn!("api document not serializable for logging: {err}"),
                }
                sink.accept(document);
                *self = Self::new();
                Ok(())
            }
            Err(errors) => {
                warn!("submit rejected with {} field error(s)", errors.len());
                self.touch_all();
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Drop the draft and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn apply(&mut self, edit: Edit) -> Result<String, EditError> {
        match edit {
            Edit::ApiNameChanged(name) => {
                self.draft.api_name = name;
                Ok("api_name".to_string())
            }
            Edit::UrlChanged(url) => {
                self.draft.url = url;
                Ok("url".to_string())
            }
            Edit::MethodChanged(method) => {
                self.draft.method = method;
                Ok("method".to_string())
            }

            Edit::HeaderKeyChanged(index, key) => {
                set_pair_key(&mut self.draft.headers, PairList::Headers, index, key)?;
                Ok(format!("headers[{index}].key"))
            }
            Edit::HeaderValueChanged(index, value) => {
                set_pair_value(&mut self.draft.headers, PairList::Headers, index, value)?;
                Ok(format!("headers[{index}].value"))
            }
            Edit::AddHeader => {
                self.draft.headers.push(Pair::default());
                Ok("headers".to_string())
            }
            Edit::RemoveHeader(index) => {
                remove_pair(&mut self.draft.headers, PairList::Headers, index)?;
                Ok("headers".to_string())
            }

            Edit::TokenRequiredToggled(enabled) => {
                self.draft.token_required = enabled;
                self.draft.token_config = if enabled {
                    Some(TokenConfig::default())
                } else {
                    None
                };
                Ok("token_required".to_string())
            }
            Edit::TokenUrlChanged(url) => {
                self.token_config_mut()?.token_url = url;
                Ok("token_config.token_url".to_string())
            }
            Edit::TokenMethodChanged(method) => {
                let config = self.token_config_mut()?;
                config.token_method = method;
                if method == TokenMethod::GET {
                    // A GET carries no body, so the type and payload are
                    // meaningless and cleared outright.
                    config.body = None;
                }
                Ok("token_config.token_method".to_string())
            }
            Edit::TokenBodyTypeChanged(body_type) => {
                self.token_config_mut()?.body = Some(TokenPayload::initial(body_type));
                Ok("token_config.token_body_type".to_string())
            }
            Edit::TokenBodyTextChanged(text) => {
                match &mut self.token_config_mut()?.body {
                    Some(TokenPayload::Json(current)) | Some(TokenPayload::Raw(current)) => {
                        *current = text;
                    }
                    _ => return Err(EditError::TokenBodyNotText),
                }
                Ok("token_config.token_body".to_string())
            }
            Edit::TokenBodyKeyChanged(index, key) => {
                set_pair_key(self.token_body_pairs_mut()?, PairList::TokenBody, index, key)?;
                Ok(format!("token_config.token_body[{index}].key"))
            }
            Edit::TokenBodyValueChanged(index, value) => {
                set_pair_value(
                    self.token_body_pairs_mut()?,
                    PairList::TokenBody,
                    index,
                    value,
                )?;
                Ok(format!("token_config.token_body[{index}].value"))
            }
            Edit::AddTokenBodyField => {
                self.token_body_pairs_mut()?.push(Pair::default());
                Ok("token_config.token_body".to_string())
            }
            Edit::RemoveTokenBodyField(index) => {
                remove_pair(self.token_body_pairs_mut()?, PairList::TokenBody, index)?;
                Ok("token_config.token_body".to_string())
            }
            Edit::TokenResponsePathChanged(path) => {
                self.token_config_mut()?.token_response_path = path;
                Ok("token_config.token_response_path".to_string())
            }

            Edit::ResponseKeyChanged(index, key) => {
                set_pair_key(
                    &mut self.draft.response_config,
                    PairList::ResponseConfig,
                    index,
                    key,
                )?;
                Ok(format!("response_config[{index}].key"))
            }
            Edit::ResponseValueChanged(index, value) => {
                set_pair_value(
                    &mut self.draft.response_config,
                    PairList::ResponseConfig,
                    index,
                    value,
                )?;
                Ok(format!("response_config[{index}].value"))
            }
            Edit::AddResponseField => {
                self.draft.response_config.push(Pair::default());
                Ok("response_config".to_string())
            }
            Edit::RemoveResponseField(index) => {
                remove_pair(&mut self.draft.response_config, PairList::ResponseConfig, index)?;
                Ok("response_config".to_string())
            }

            Edit::RequestBodyTypeChanged(body_type) => {
                self.draft.request_body_type = body_type;
                if body_type == BodyType::FormData {
                    self.draft.form_data = vec![Pair::default()];
                } else {
                    self.draft.form_data.clear();
                }
                Ok("request_body_type".to_string())
            }
            Edit::RequestBodyChanged(body) => {
                self.draft.request_body = body;
                Ok("request_body".to_string())
            }
            Edit::FormDataKeyChanged(index, key) => {
                set_pair_key(&mut self.draft.form_data, PairList::FormData, index, key)?;
                Ok(format!("form_data[{index}].key"))
            }
            Edit::FormDataValueChanged(index, value) => {
                set_pair_value(&mut self.draft.form_data, PairList::FormData, index, value)?;
                Ok(format!("form_data[{index}].value"))
            }
            Edit::AddFormDataField => {
                self.draft.form_data.push(Pair::default());
                Ok("form_data".to_string())
            }
            Edit::RemoveFormDataField(index) => {
                remove_pair(&mut self.draft.form_data, PairList::FormData, index)?;
                Ok("form_data".to_string())
            }
        }
    }

    fn token_config_mut(&mut self) -> Result<&mut TokenConfig, EditError> {
        self.draft
            .token_config
            .as_mut()
            .ok_or(EditError::TokenConfigAbsent)
    }

    fn token_body_pairs_mut(&mut self) -> Result<&mut Vec<Pair>, EditError> {
        match &mut self.token_config_mut()?.body {
            Some(TokenPayload::FormData(pairs)) => Ok(pairs),
            _ => Err(EditError::TokenBodyNotFormData),
        }
    }

    fn touch_all(&mut self) {
        for path in [
            "api_name",
            "url",
            "method",
            "token_required",
            "request_body_type",
            "request_body",
            "form_data",
        ] {
            self.touched.insert(path.to_string());
        }
        for index in 0..self.draft.headers.len() {
            self.touched.insert(format!("headers[{index}].key"));
            self.touched.insert(format!("headers[{index}].value"));
        }
        for index in 0..self.draft.response_config.len() {
            self.touched.insert(format!("response_config[{index}].key"));
            self.touched.insert(format!("response_config[{index}].value"));
        }
        for index in 0..self.draft.form_data.len() {
            self.touched.insert(format!("form_data[{index}].key"));
            self.touched.insert(format!("form_data[{index}].value"));
        }
        if let Some(config) = &self.draft.token_config {
            for path in [
                "token_config",
                "token_config.token_url",
                "token_config.token_method",
                "token_config.token_body_type",
                "token_config.token_body",
                "token_config.token_response_path",
            ] {
                self.touched.insert(path.to_string());
            }
            if let Some(TokenPayload::FormData(pairs)) = &config.body {
                for index in 0..pairs.len() {
                    self.touched
                        .insert(format!("token_config.token_body[{index}].key"));
                    self.touched
                        .insert(format!("token_config.token_body[{index}].value"));
                }
            }
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

fn set_pair_key(
    pairs: &mut [Pair],
    list: PairList,
    index: usize,
    key: String,
) -> Result<(), EditError> {
    let len = pairs.len();
    let pair = pairs
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { list, index, len })?;
    pair.key = key;
    Ok(())
}

fn set_pair_value(
    pairs: &mut [Pair],
    list: PairList,
    index: usize,
    value: String,
) -> Result<(), EditError> {
    let len = pairs.len();
    let pair = pairs
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { list, index, len })?;
    pair.value = value;
    Ok(())
}

fn remove_pair(pairs: &mut Vec<Pair>, list: PairList, index: usize) -> Result<(), EditError> {
    if index >= pairs.len() {
        return Err(EditError::IndexOutOfRange {
            list,
            index,
            len: pairs.len(),
        });
    }
    pairs.remove(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::REQUIRED;

    #[derive(Debug, Default)]
    struct RecordingSink {
        documents: Vec<ApiDocument>,
    }

    impl DocumentSink for RecordingSink {
        fn accept(&mut self, document: ApiDocument) {
            self.documents.push(document);
        }
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Drive the controller to a draft that passes every validation rule.
    fn fill_valid(controller: &mut FormController) {
        controller
            .update(Edit::ApiNameChanged("List Users".to_string()))
            .unwrap();
        controller
            .update(Edit::UrlChanged("https://api.example.com/users".to_string()))
            .unwrap();
        // The initial blank header and response rows would fail key
        // validation; drop them.
        controller.update(Edit::RemoveHeader(0)).unwrap();
        controller.update(Edit::RemoveResponseField(0)).unwrap();
    }

    #[test]
    fn test_token_toggle_installs_and_removes_config() {
        let mut controller = FormController::new();

        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        assert_eq!(
            controller.draft().token_config,
            Some(TokenConfig::default())
        );

        controller.update(Edit::TokenRequiredToggled(false)).unwrap();
        assert!(controller.draft().token_config.is_none());
    }

    #[test]
    fn test_token_toggle_round_trip_restores_draft() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        let before = controller.draft().clone();

        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        controller
            .update(Edit::TokenUrlChanged("https://auth.example.com".to_string()))
            .unwrap();
        controller
            .update(Edit::TokenMethodChanged(TokenMethod::POST))
            .unwrap();
        controller.update(Edit::TokenRequiredToggled(false)).unwrap();

        assert_eq!(controller.draft(), &before);
    }

    #[test]
    fn test_token_method_get_clears_body() {
        let mut controller = FormController::new();
        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        controller
            .update(Edit::TokenMethodChanged(TokenMethod::POST))
            .unwrap();
        controller
            .update(Edit::TokenBodyTypeChanged(BodyType::FormData))
            .unwrap();
        controller
            .update(Edit::TokenBodyKeyChanged(0, "client_id".to_string()))
            .unwrap();

        controller
            .update(Edit::TokenMethodChanged(TokenMethod::GET))
            .unwrap();

        let config = controller.draft().token_config.as_ref().unwrap();
        assert_eq!(config.body, None);
    }

    #[test]
    fn test_token_body_type_seeds_payload() {
        let mut controller = FormController::new();
        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        controller
            .update(Edit::TokenMethodChanged(TokenMethod::POST))
            .unwrap();

        controller
            .update(Edit::TokenBodyTypeChanged(BodyType::FormData))
            .unwrap();
        let config = controller.draft().token_config.as_ref().unwrap();
        assert_eq!(
            config.body,
            Some(TokenPayload::FormData(vec![Pair::default()]))
        );

        controller
            .update(Edit::TokenBodyTypeChanged(BodyType::Raw))
            .unwrap();
        let config = controller.draft().token_config.as_ref().unwrap();
        assert_eq!(config.body, Some(TokenPayload::Raw(String::new())));
    }

    #[test]
    fn test_request_body_type_form_data_seeds_one_row() {
        let mut controller = FormController::new();

        controller
            .update(Edit::RequestBodyTypeChanged(BodyType::FormData))
            .unwrap();
        assert_eq!(controller.draft().form_data, vec![Pair::default()]);

        controller
            .update(Edit::RequestBodyTypeChanged(BodyType::Json))
            .unwrap();
        assert!(controller.draft().form_data.is_empty());
    }

    #[test]
    fn test_request_body_type_switch_keeps_body_text() {
        let mut controller = FormController::new();
        controller
            .update(Edit::RequestBodyChanged("{\"a\":1}".to_string()))
            .unwrap();

        controller
            .update(Edit::RequestBodyTypeChanged(BodyType::FormData))
            .unwrap();

        assert_eq!(controller.draft().request_body, "{\"a\":1}");
    }

    #[test]
    fn test_remove_then_add_yields_fresh_row() {
        let mut controller = FormController::new();
        controller
            .update(Edit::ResponseKeyChanged(0, "user_id".to_string()))
            .unwrap();
        controller
            .update(Edit::ResponseValueChanged(0, "data.id".to_string()))
            .unwrap();

        controller.update(Edit::RemoveResponseField(0)).unwrap();
        assert!(controller.draft().response_config.is_empty());

        controller.update(Edit::AddResponseField).unwrap();
        assert_eq!(controller.draft().response_config, vec![Pair::default()]);
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut controller = FormController::new();
        let before = controller.draft().clone();

        let err = controller.update(Edit::RemoveHeader(5)).unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                list: PairList::Headers,
                index: 5,
                len: 1,
            }
        );
        assert_eq!(controller.draft(), &before);
    }

    #[test]
    fn test_remove_from_empty_list_is_rejected() {
        let mut controller = FormController::new();
        controller.update(Edit::RemoveResponseField(0)).unwrap();

        let err = controller.update(Edit::RemoveResponseField(0)).unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn test_token_edit_without_config_is_rejected() {
        let mut controller = FormController::new();

        let err = controller
            .update(Edit::TokenUrlChanged("https://auth.example.com".to_string()))
            .unwrap_err();
        assert_eq!(err, EditError::TokenConfigAbsent);
    }

    #[test]
    fn test_token_body_text_edit_on_form_data_is_rejected() {
        let mut controller = FormController::new();
        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        controller
            .update(Edit::TokenMethodChanged(TokenMethod::POST))
            .unwrap();
        controller
            .update(Edit::TokenBodyTypeChanged(BodyType::FormData))
            .unwrap();

        let err = controller
            .update(Edit::TokenBodyTextChanged("{}".to_string()))
            .unwrap_err();
        assert_eq!(err, EditError::TokenBodyNotText);
    }

    #[test]
    fn test_token_pair_edit_on_text_body_is_rejected() {
        let mut controller = FormController::new();
        controller.update(Edit::TokenRequiredToggled(true)).unwrap();

        let err = controller.update(Edit::AddTokenBodyField).unwrap_err();
        assert_eq!(err, EditError::TokenBodyNotFormData);
    }

    #[test]
    fn test_errors_gated_by_touched() {
        let mut controller = FormController::new();

        // The fresh draft already fails validation, but nothing has been
        // touched, so nothing displays yet.
        assert!(!controller.errors().is_empty());
        assert!(controller.visible_errors().is_empty());

        controller.update(Edit::ApiNameChanged(String::new())).unwrap();

        let visible = controller.visible_errors();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.get("api_name"), Some(REQUIRED));
    }

    #[test]
    fn test_visibility_tracks_draft() {
        let mut controller = FormController::new();

        let visibility = controller.visibility();
        assert!(!visibility.token_config);
        assert!(visibility.request_body_text);
        assert!(!visibility.form_data);

        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        let visibility = controller.visibility();
        assert!(visibility.token_config);
        // Token method defaults to GET: no body type selector yet.
        assert!(!visibility.token_body_type);

        controller
            .update(Edit::TokenMethodChanged(TokenMethod::POST))
            .unwrap();
        controller
            .update(Edit::TokenBodyTypeChanged(BodyType::FormData))
            .unwrap();
        let visibility = controller.visibility();
        assert!(visibility.token_body_type);
        assert!(visibility.token_body_pairs);
        assert!(!visibility.token_body_text);

        controller
            .update(Edit::RequestBodyTypeChanged(BodyType::FormData))
            .unwrap();
        let visibility = controller.visibility();
        assert!(visibility.form_data);
        assert!(!visibility.request_body_text);
    }

    #[test]
    fn test_submit_failure_keeps_draft_and_shows_all_errors() {
        init_logging();
        let mut controller = FormController::new();
        let mut sink = RecordingSink::default();
        let before = controller.draft().clone();

        let errors = controller.submit(&mut sink).unwrap_err();

        assert_eq!(errors.get("api_name"), Some(REQUIRED));
        assert_eq!(errors.get("url"), Some(REQUIRED));
        assert_eq!(errors.get("headers[0].key"), Some(REQUIRED));
        assert!(sink.documents.is_empty());
        assert_eq!(controller.draft(), &before);
        // After a rejected submit every error is visible.
        assert_eq!(&controller.visible_errors(), controller.errors());
    }

    #[test]
    fn test_submit_success_hands_off_and_resets() {
        init_logging();
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        let mut sink = RecordingSink::default();

        controller.submit(&mut sink).unwrap();

        assert_eq!(sink.documents.len(), 1);
        let document = &sink.documents[0];
        assert_eq!(document.api_name, "List Users");
        assert_eq!(document.url, "https://api.example.com/users");
        assert_eq!(document.method, HttpMethod::GET);
        assert!(document.token_config.is_none());

        // The controller is back at the initial draft with a clean slate.
        assert_eq!(controller.draft(), &ApiDocumentDraft::new());
        assert!(controller.visible_errors().is_empty());
    }

    #[test]
    fn test_submit_with_token_config() {
        let mut controller = FormController::new();
        fill_valid(&mut controller);
        controller.update(Edit::TokenRequiredToggled(true)).unwrap();
        controller
            .update(Edit::TokenUrlChanged(
                "https://auth.example.com/token".to_string(),
            ))
            .unwrap();
        controller
            .update(Edit::TokenMethodChanged(TokenMethod::POST))
            .unwrap();
        controller
            .update(Edit::TokenBodyTypeChanged(BodyType::FormData))
            .unwrap();
        controller
            .update(Edit::TokenBodyKeyChanged(0, "client_id".to_string()))
            .unwrap();
        controller
            .update(Edit::TokenBodyValueChanged(0, "abc".to_string()))
            .unwrap();
        controller
            .update(Edit::TokenResponsePathChanged("data.access_token".to_string()))
            .unwrap();

        let mut sink = RecordingSink::default();
        controller.submit(&mut sink).unwrap();

        let token = sink.documents[0].token_config.as_ref().unwrap();
        assert_eq!(token.token_url, "https://auth.example.com/token");
        assert_eq!(token.token_body_type, Some(BodyType::FormData));
        assert_eq!(token.token_response_path, "data.access_token");
    }
}
