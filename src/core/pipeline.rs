use tracing::debug;

use super::error::DanfeError;
use super::types::{DanfeLabel, NfeDocument};

/// Anything that can turn a source document into an [`NfeDocument`].
///
/// Parsing is all-or-nothing: an implementation returns either a fully
/// validated document or an error, never a partial result.
pub trait NfeParser {
    fn parse(&self, source: &str) -> Result<NfeDocument, DanfeError>;
}

/// Anything that can render an [`NfeDocument`] into label markup.
///
/// Implementations must be deterministic: the same document always yields
/// byte-identical markup.
pub trait LabelRenderer {
    fn render(&self, document: NfeDocument) -> Result<DanfeLabel, DanfeError>;
}

impl<T: NfeParser + ?Sized> NfeParser for &T {
    fn parse(&self, source: &str) -> Result<NfeDocument, DanfeError> {
        (**self).parse(source)
    }
}

impl<T: NfeParser + ?Sized> NfeParser for Box<T> {
    fn parse(&self, source: &str) -> Result<NfeDocument, DanfeError> {
        (**self).parse(source)
    }
}

impl<T: LabelRenderer + ?Sized> LabelRenderer for &T {
    fn render(&self, document: NfeDocument) -> Result<DanfeLabel, DanfeError> {
        (**self).render(document)
    }
}

impl<T: LabelRenderer + ?Sized> LabelRenderer for Box<T> {
    fn render(&self, document: NfeDocument) -> Result<DanfeLabel, DanfeError> {
        (**self).render(document)
    }
}

/// Parse → render, with no state of its own beyond the two collaborators.
///
/// Errors from either stage are returned unmodified.
///
/// ```
/// use danfe::core::*;
///
/// struct Reject;
///
/// impl NfeParser for Reject {
///     fn parse(&self, source: &str) -> Result<NfeDocument, DanfeError> {
///         Err(DanfeError::MalformedDocument(format!("{} bytes", source.len())))
///     }
/// }
///
/// struct Summary;
///
/// impl LabelRenderer for Summary {
///     fn render(&self, document: NfeDocument) -> Result<DanfeLabel, DanfeError> {
///         let markup = document.summary();
///         Ok(DanfeLabel::new(document, markup))
///     }
/// }
///
/// let pipeline = DanfePipeline::new(Reject, Summary);
/// let err = pipeline.generate("<NFe>").unwrap_err();
/// assert!(matches!(err, DanfeError::MalformedDocument(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DanfePipeline<P, R> {
    parser: P,
    renderer: R,
}

impl<P: NfeParser, R: LabelRenderer> DanfePipeline<P, R> {
    pub fn new(parser: P, renderer: R) -> Self {
        Self { parser, renderer }
    }

    pub fn generate(&self, source: &str) -> Result<DanfeLabel, DanfeError> {
        let document = self.parser.parse(source)?;
        debug!(
            number = document.number(),
            series = document.series(),
            authorized = document.authorization().is_some(),
            "parsed NFe"
        );
        let label = self.renderer.render(document)?;
        debug!(bytes = label.markup().len(), "rendered label");
        Ok(label)
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
