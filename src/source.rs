//! Acquisition of NFe XML sources from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Failure to obtain a source document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list '{}': {source}", dir.display())]
    List {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no XML file matching '{code}' in '{}'", dir.display())]
    NotFound { code: String, dir: PathBuf },
}

/// Read a whole NFe XML file in one go.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// A directory of NFe XML files, e.g. the e-commerce drop folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDirectory {
    dir: PathBuf,
}

impl XmlDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// All `*.xml` files in the directory, sorted by path.
    pub fn list(&self) -> Result<Vec<PathBuf>, SourceError> {
        let list_err = |source| SourceError::List {
            dir: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();
            let is_xml = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
            if is_xml && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// First XML file (in sorted order) whose name contains `code`.
    ///
    /// File names in the drop folder embed the access key or the invoice
    /// number, so either can be used as `code`.
    pub fn find(&self, code: &str) -> Result<PathBuf, SourceError> {
        let found = self.list()?.into_iter().find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.contains(code))
        });

        match found {
            Some(path) => {
                debug!(code, path = %path.display(), "XML source found");
                Ok(path)
            }
            None => Err(SourceError::NotFound {
                code: code.to_string(),
                dir: self.dir.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<NFe/>").unwrap();
    }

    #[test]
    fn list_only_xml_files_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b-000124.xml");
        touch(dir.path(), "a-000123.XML");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("sub.xml")).unwrap();

        let files = XmlDirectory::new(dir.path()).list().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a-000123.XML", "b-000124.xml"]);
    }

    #[test]
    fn find_by_code() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "35250912345678000199550010000001231000001234-nfe.xml");
        touch(dir.path(), "35250912345678000199550010000001241000001241-nfe.xml");

        let xml_dir = XmlDirectory::new(dir.path());
        let found = xml_dir.find("0000001241").unwrap();
        assert!(found.ends_with("35250912345678000199550010000001241000001241-nfe.xml"));
    }

    #[test]
    fn find_missing_code() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "nfe-1.xml");
        let err = XmlDirectory::new(dir.path()).find("999").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn list_missing_directory() {
        let err = XmlDirectory::new("/nonexistent/danfe/xml").list().unwrap_err();
        assert!(matches!(err, SourceError::List { .. }));
    }

    #[test]
    fn read_missing_file() {
        let err = read_source(Path::new("/nonexistent/nfe.xml")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }
}
