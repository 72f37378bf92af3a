//! TOML configuration with `DANFE_*` environment overrides.
//!
//! ```toml
//! xml_dir = "S:/0_ecommerce_XML"
//! monthly_subdir = true
//! output = "labels/danfe.zpl"
//! recipient_document = "masked"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::source::XmlDirectory;
use crate::zpl::RecipientDocument;

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DanfeConfig {
    /// Directory searched when generating by invoice code.
    pub xml_dir: Option<PathBuf>,
    /// Append the current `YYYY-MM` to `xml_dir`.
    pub monthly_subdir: bool,
    /// Default output path for the rendered label.
    pub output: PathBuf,
    pub recipient_document: RecipientDocument,
}

impl Default for DanfeConfig {
    fn default() -> Self {
        Self {
            xml_dir: None,
            monthly_subdir: false,
            output: PathBuf::from("danfe_generated.zpl"),
            recipient_document: RecipientDocument::Shown,
        }
    }
}

impl DanfeConfig {
    /// Looked up in the working directory when no path is given.
    pub const FILE_NAME: &'static str = "danfe.toml";

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given; otherwise `danfe.toml` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(Self::FILE_NAME);
                if local.is_file() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `DANFE_XML_DIR`, `DANFE_MONTHLY_SUBDIR`, `DANFE_OUTPUT` and
    /// `DANFE_RECIPIENT_DOCUMENT` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Unparseable values
    /// are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("DANFE_XML_DIR").filter(|v| !v.is_empty()) {
            self.xml_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = lookup("DANFE_MONTHLY_SUBDIR") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.monthly_subdir = true,
                "0" | "false" | "no" => self.monthly_subdir = false,
                _ => {}
            }
        }
        if let Some(output) = lookup("DANFE_OUTPUT").filter(|v| !v.is_empty()) {
            self.output = PathBuf::from(output);
        }
        if let Some(mode) = lookup("DANFE_RECIPIENT_DOCUMENT") {
            match mode.trim().to_ascii_lowercase().as_str() {
                "shown" => self.recipient_document = RecipientDocument::Shown,
                "masked" => self.recipient_document = RecipientDocument::Masked,
                _ => {}
            }
        }
        self
    }

    /// The XML directory in effect on `today`, if one is configured.
    pub fn xml_directory(&self, today: NaiveDate) -> Option<XmlDirectory> {
        let base = self.xml_dir.as_ref()?;
        let dir = if self.monthly_subdir {
            base.join(today.format("%Y-%m").to_string())
        } else {
            base.clone()
        };
        Some(XmlDirectory::new(dir))
    }
}
