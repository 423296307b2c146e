//! Quill is the form state controller behind an API document form: it owns
//! the in-progress draft describing how to call an endpoint (URL, method,
//! headers, token acquisition, request body, response field mapping),
//! applies field edits with their conditional side effects, validates the
//! draft, and hands the finalized document to an executor on submit.
//!
//! Rendering and request execution live outside this crate; see
//! [`controller::FormController`] for the edit/validate/submit surface and
//! [`document::DocumentSink`] for the executor seam.

pub mod controller;
pub mod document;
pub mod types;
pub mod validate;

pub use controller::{Edit, EditError, FormController, PairList, SectionVisibility};
pub use document::{ApiDocument, DocumentMetadata, DocumentSink, TokenBodyRepr, TokenDocument};
pub use types::{
    ApiDocumentDraft, BodyType, HttpMethod, Pair, TokenConfig, TokenMethod, TokenPayload,
};
pub use validate::{ValidationErrors, validate};
