//! DANFE Simplificado label rendering in ZPL.
//!
//! The template (command sequence, field origins, font sizes) is a contract
//! with the label printers. Any change to it is an output-format change and
//! must bump [`LAYOUT_VERSION`].
//!
//! # Example
//!
//! ```no_run
//! use danfe::core::*;
//! use danfe::zpl::ZplRenderer;
//!
//! let xml = std::fs::read_to_string("nfe.xml").unwrap();
//! let nfe = danfe::nfe::from_nfe_xml(&xml).unwrap();
//! let label = ZplRenderer::new().render(nfe).unwrap();
//! println!("{}", label.markup());
//! ```

mod escape;
mod renderer;

pub use escape::escape_field_data;
pub use renderer::{RecipientDocument, ZplRenderer, to_danfe_zpl};

/// Version of the DANFE Simplificado template emitted by [`ZplRenderer`].
pub const LAYOUT_VERSION: u32 = 1;
