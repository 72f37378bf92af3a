//! NFe XML parsing.
//!
//! Projects the SEFAZ NFe layout into the core [`NfeDocument`](crate::core::NfeDocument).
//! Elements are matched by local name along fixed structural paths, so both
//! a bare `<NFe>` and the authorized `<nfeProc>` envelope are accepted.
//!
//! # Example
//!
//! ```no_run
//! use danfe::nfe;
//!
//! let xml = std::fs::read_to_string("nfe.xml").unwrap();
//! let document = nfe::from_nfe_xml(&xml).unwrap();
//! println!("{}", document.summary());
//! ```

mod parser;

pub use parser::{XmlNfeParser, from_nfe_xml};

/// Namespace of the NFe layout published by the Portal Fiscal.
pub const NFE_NAMESPACE: &str = "http://www.portalfiscal.inf.br/nfe";
