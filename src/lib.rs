//! # danfe
//!
//! Turns an authorized Brazilian NFe (Nota Fiscal Eletrônica) XML document
//! into a DANFE Simplificado shipping label in ZPL, ready for a Zebra-class
//! thermal printer.
//!
//! Parsing and rendering are separate stages joined by [`DanfePipeline`], so
//! either side can be replaced: another source format behind [`NfeParser`],
//! another label layout behind [`LabelRenderer`].
//!
//! ## Quick Start
//!
//! Build a validated [`NfeDocument`] (or parse one with `danfe::nfe::from_nfe_xml`)
//! and hand it to `danfe::zpl::to_danfe_zpl`:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use danfe::core::*;
//!
//! let issued_at = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let nfe = NfeDocumentBuilder::new("123", "1", "35250912345678000199550010000001231000001234", issued_at)
//!     .issuer(IssuerBuilder::new("12345678000199", "ACME Comercio LTDA", "SP").build().unwrap())
//!     .recipient(RecipientBuilder::new(TaxIdKind::Cpf, "12345678901", "Maria Silva", "RJ").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(nfe.summary(), "NFe 123/1 - Emitente: ACME Comercio LTDA - Destinatário: Maria Silva");
//! assert_eq!(
//!     format_tax_id(nfe.recipient().tax_id().digits(), TaxIdKind::Cpf).unwrap(),
//!     "123.456.789-01"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | NFe types, validation, formatting, pipeline contracts |
//! | `nfe` (default) | NFe XML parser |
//! | `zpl` (default) | DANFE Simplificado ZPL renderer |
//! | `fs` (default) | File store, XML directory lookup, TOML config, generator facade |
//! | `cli` | The `danfe` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "nfe")]
pub mod nfe;

#[cfg(feature = "zpl")]
pub mod zpl;

#[cfg(feature = "fs")]
pub mod store;

#[cfg(feature = "fs")]
pub mod source;

#[cfg(feature = "fs")]
pub mod config;

#[cfg(feature = "fs")]
pub mod facade;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
