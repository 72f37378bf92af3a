//! Brazilian presentation rules for dates and tax identifiers.
//!
//! Two independent, stateless rule sets. The free functions carry the
//! rules; [`DateFormatter`] and [`DocumentFormatter`] expose them as
//! capabilities so a renderer can be handed a different convention.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::error::DanfeError;
use super::types::TaxIdKind;

/// `DD/MM/YYYY`. The timestamp's own fields are used; no timezone conversion.
pub fn format_date(ts: NaiveDateTime) -> String {
    ts.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:MM:SS`.
pub fn format_datetime(ts: NaiveDateTime) -> String {
    ts.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Punctuate a digits-only tax identifier.
///
/// - CPF: `XXX.XXX.XXX-XX`
/// - CNPJ: `XX.XXX.XXX/XXXX-XX`
///
/// Fails with [`DanfeError::MalformedInput`] when `digits` does not have the
/// digit count `kind` requires.
pub fn format_tax_id(digits: &str, kind: TaxIdKind) -> Result<String, DanfeError> {
    if digits.len() != kind.digit_count() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DanfeError::MalformedInput(format!(
            "{} expects {} digits, got '{digits}'",
            kind.label(),
            kind.digit_count()
        )));
    }

    let d = digits;
    Ok(match kind {
        TaxIdKind::Cpf => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..11]),
        TaxIdKind::Cnpj => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        ),
    })
}

/// Split an access key into space-separated groups of four characters.
pub fn format_access_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    chars
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an NFe date/time field.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` with or without a UTC offset and a bare
/// `YYYY-MM-DD` (taken as midnight). An offset is dropped: the local fields
/// are kept exactly as written.
pub fn parse_nfe_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Date presentation capability.
pub trait DateFormatter {
    fn format_date(&self, ts: NaiveDateTime) -> String;
    fn format_datetime(&self, ts: NaiveDateTime) -> String;
}

/// Tax identifier presentation capability.
pub trait DocumentFormatter {
    fn format_tax_id(&self, digits: &str, kind: TaxIdKind) -> Result<String, DanfeError>;
}

/// `dd/mm/aaaa` dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianDateFormatter;

impl DateFormatter for BrazilianDateFormatter {
    fn format_date(&self, ts: NaiveDateTime) -> String {
        format_date(ts)
    }

    fn format_datetime(&self, ts: NaiveDateTime) -> String {
        format_datetime(ts)
    }
}

/// CPF/CNPJ masks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianDocumentFormatter;

impl DocumentFormatter for BrazilianDocumentFormatter {
    fn format_tax_id(&self, digits: &str, kind: TaxIdKind) -> Result<String, DanfeError> {
        format_tax_id(digits, kind)
    }
}
