use thiserror::Error;

/// Errors that can occur while turning an NFe into a DANFE label.
///
/// Every failure of the parse → render pipeline is one of these four kinds.
/// None of them is recovered from locally; they surface unmodified to the
/// caller of [`DanfePipeline::generate`](super::DanfePipeline::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DanfeError {
    /// The source document could not be decoded at all (not well-formed).
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A required field is absent from the source document.
    #[error("missing field: {path}")]
    MissingField {
        /// Structural path of the absent field (e.g. "infNFe/emit/CNPJ").
        path: String,
    },

    /// An extracted value violates a domain invariant.
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// Formatting received input that does not match its declared shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl DanfeError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        DanfeError::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        DanfeError::Validation(ValidationError::new(field, message))
    }
}

impl From<ValidationError> for DanfeError {
    fn from(e: ValidationError) -> Self {
        DanfeError::Validation(e)
    }
}

/// A single invariant violation with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "issuer.tax_id").
    pub field: String,
    /// The constraint that was violated.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
