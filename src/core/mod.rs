//! Core NFe types, presentation rules, and the parse → render pipeline.
//!
//! This module holds the domain model shared by every source format and
//! every label renderer, together with the contracts they implement.

mod builder;
mod error;
pub mod format;
mod pipeline;
pub mod states;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use format::{
    BrazilianDateFormatter, BrazilianDocumentFormatter, DateFormatter, DocumentFormatter,
    format_access_key, format_date, format_datetime, format_tax_id, parse_nfe_datetime,
};
pub use pipeline::*;
pub use states::is_known_state_code;
pub use types::*;
pub use validation::{ACCESS_KEY_LEN, PROTOCOL_NUMBER_LEN};
