use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::PATCH,
        HttpMethod::DELETE,
    ];

    /// Whether this method requires a request body on submission.
    pub fn requires_body(&self) -> bool {
        !matches!(self, HttpMethod::GET)
    }
}

/// Method used against the token endpoint. The token endpoint only ever
/// speaks GET or POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenMethod {
    GET,
    POST,
}

impl TokenMethod {
    pub const ALL: [TokenMethod; 2] = [TokenMethod::GET, TokenMethod::POST];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyType {
    Json,
    Raw,
    FormData,
}

impl BodyType {
    pub const ALL: [BodyType; 3] = [BodyType::Json, BodyType::Raw, BodyType::FormData];
}

/// One entry of a pair list (headers, form data fields, response mappings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body sent to the token endpoint. The variant is the body type, so the
/// payload shape can never disagree with the selected type.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenPayload {
    Json(String),
    Raw(String),
    FormData(Vec<Pair>),
}

impl TokenPayload {
    /// A freshly selected payload: empty text for json/raw, one blank
    /// pair for form data so the form has a row to edit.
    pub fn initial(body_type: BodyType) -> Self {
        match body_type {
            BodyType::Json => TokenPayload::Json(String::new()),
            BodyType::Raw => TokenPayload::Raw(String::new()),
            BodyType::FormData => TokenPayload::FormData(vec![Pair::default()]),
        }
    }

    pub fn body_type(&self) -> BodyType {
        match self {
            TokenPayload::Json(_) => BodyType::Json,
            TokenPayload::Raw(_) => BodyType::Raw,
            TokenPayload::FormData(_) => BodyType::FormData,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            TokenPayload::Json(text) | TokenPayload::Raw(text) => Some(text),
            TokenPayload::FormData(_) => None,
        }
    }

    pub fn pairs(&self) -> Option<&[Pair]> {
        match self {
            TokenPayload::FormData(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// Settings for acquiring an authentication token before calling the
/// target API. Present on the draft only while "token required" is on.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenConfig {
    pub token_url: String,
    pub token_method: TokenMethod,
    /// None once the token method is GET (a GET carries no body).
    pub body: Option<TokenPayload>,
    pub token_response_path: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            token_url: String::new(),
            token_method: TokenMethod::GET,
            body: Some(TokenPayload::Json(String::new())),
            token_response_path: String::new(),
        }
    }
}

/// The in-progress API document being edited by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocumentDraft {
    pub api_name: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<Pair>,
    pub token_required: bool,
    pub token_config: Option<TokenConfig>,
    pub response_config: Vec<Pair>,
    pub request_body_type: BodyType,
    /// Body text when the body type is json or raw. Kept alongside
    /// `form_data`; exactly one of the two is active per `request_body_type`.
    pub request_body: String,
    pub form_data: Vec<Pair>,
}

impl ApiDocumentDraft {
    pub fn new() -> Self {
        Self {
            api_name: String::new(),
            url: String::new(),
            method: HttpMethod::GET,
            headers: vec![Pair::default()],
            token_required: false,
            token_config: None,
            response_config: vec![Pair::default()],
            request_body_type: BodyType::Json,
            request_body: String::new(),
            form_data: Vec::new(),
        }
    }
}

impl Default for ApiDocumentDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::GET => write!(f, "GET"),
            HttpMethod::POST => write!(f, "POST"),
            HttpMethod::PUT => write!(f, "PUT"),
            HttpMethod::PATCH => write!(f, "PATCH"),
            HttpMethod::DELETE => write!(f, "DELETE"),
        }
    }
}

impl std::fmt::Display for TokenMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenMethod::GET => write!(f, "GET"),
            TokenMethod::POST => write!(f, "POST"),
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyType::Json => write!(f, "JSON"),
            BodyType::Raw => write!(f, "Raw"),
            BodyType::FormData => write!(f, "Form Data"),
        }
    }
}
