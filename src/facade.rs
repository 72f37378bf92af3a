//! Ready-wired generator: XML file in, ZPL file out.
//!
//! Assembly only. All decisions live in the pipeline; this module reads the
//! source, runs [`DanfePipeline`] and hands the markup to a [`LabelStore`].

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::config::DanfeConfig;
use crate::core::{DanfeError, DanfeLabel, DanfePipeline};
use crate::nfe::XmlNfeParser;
use crate::source::{SourceError, XmlDirectory, read_source};
use crate::store::{FileSystemStore, LabelStore, StoreError};
use crate::zpl::ZplRenderer;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Danfe(#[from] DanfeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no XML directory configured")]
    NoXmlDirectory,
}

/// [`XmlNfeParser`] + [`ZplRenderer`] + a [`LabelStore`].
///
/// ```no_run
/// use std::path::Path;
/// use danfe::facade::DanfeGenerator;
///
/// let generator = DanfeGenerator::new();
/// let label = generator.generate_from_path(Path::new("nfe.xml")).unwrap();
/// generator.save(&label, Path::new("danfe.zpl")).unwrap();
/// ```
pub struct DanfeGenerator<S = FileSystemStore> {
    pipeline: DanfePipeline<XmlNfeParser, ZplRenderer>,
    store: S,
    xml_dir: Option<XmlDirectory>,
}

impl DanfeGenerator {
    pub fn new() -> Self {
        Self::with_store(ZplRenderer::new(), FileSystemStore::new())
    }

    /// Wire the generator from configuration; `today` selects the monthly
    /// XML folder when enabled.
    pub fn from_config(config: &DanfeConfig, today: NaiveDate) -> Self {
        let renderer = ZplRenderer::new().recipient_document(config.recipient_document);
        let mut generator = Self::with_store(renderer, FileSystemStore::new());
        generator.xml_dir = config.xml_directory(today);
        generator
    }
}

impl Default for DanfeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LabelStore> DanfeGenerator<S> {
    pub fn with_store(renderer: ZplRenderer, store: S) -> Self {
        Self {
            pipeline: DanfePipeline::new(XmlNfeParser::new(), renderer),
            store,
            xml_dir: None,
        }
    }

    pub fn xml_dir(mut self, dir: XmlDirectory) -> Self {
        self.xml_dir = Some(dir);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generate(&self, xml: &str) -> Result<DanfeLabel, DanfeError> {
        self.pipeline.generate(xml)
    }

    pub fn generate_from_path(&self, path: &Path) -> Result<DanfeLabel, GeneratorError> {
        let xml = read_source(path)?;
        let label = self.pipeline.generate(&xml)?;
        info!(source = %path.display(), "{}", label.summary());
        Ok(label)
    }

    /// Locate the XML for `code` in the configured directory and render it.
    pub fn generate_by_code(&self, code: &str) -> Result<DanfeLabel, GeneratorError> {
        let dir = self.xml_dir.as_ref().ok_or(GeneratorError::NoXmlDirectory)?;
        let path = dir.find(code)?;
        self.generate_from_path(&path)
    }

    pub fn save(&self, label: &DanfeLabel, destination: &Path) -> Result<(), GeneratorError> {
        self.store.store(label.markup(), destination)?;
        Ok(())
    }
}
