use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::core::*;

/// NFe XML parser (layout 4.00, also tolerating the 2.00 `dEmi` header).
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlNfeParser;

impl XmlNfeParser {
    pub fn new() -> Self {
        Self
    }
}

impl NfeParser for XmlNfeParser {
    fn parse(&self, source: &str) -> Result<NfeDocument, DanfeError> {
        from_nfe_xml(source)
    }
}

/// Parse an NFe XML string (bare `NFe` or the `nfeProc` envelope).
pub fn from_nfe_xml(xml: &str) -> Result<NfeDocument, DanfeError> {
    debug!(bytes = xml.len(), "parsing NFe XML");

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut p = NfeParsed::default();
    let mut path: Vec<String> = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                saw_root = true;
                path.push(local_name(e));
                p.open_element(&path, e)?;
            }
            Ok(Event::Empty(ref e)) => {
                saw_root = true;
                path.push(local_name(e));
                p.open_element(&path, e)?;
                path.pop();
                p.current = None;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| DanfeError::MalformedDocument(format!("bad text: {e}")))?;
                p.push_text(&text);
            }
            Ok(Event::CData(ref e)) => {
                let text = std::str::from_utf8(e)
                    .map_err(|e| DanfeError::MalformedDocument(format!("bad CDATA: {e}")))?;
                p.push_text(text);
            }
            Ok(Event::End(_)) => {
                path.pop();
                p.current = None;
            }
            Ok(Event::Eof) => {
                if let Some(open) = path.last() {
                    return Err(DanfeError::MalformedDocument(format!(
                        "unexpected end of document inside <{open}>"
                    )));
                }
                break;
            }
            Err(e) => {
                return Err(DanfeError::MalformedDocument(format!(
                    "XML parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(DanfeError::MalformedDocument(
            "document has no root element".into(),
        ));
    }

    p.into_document()
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Every value the parser extracts, keyed by its fixed structural path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Number,
    Series,
    IssuedAt,
    IssuedOn,
    IssuerCnpj,
    IssuerName,
    IssuerTradeName,
    IssuerStateRegistration,
    IssuerState,
    RecipientCpf,
    RecipientCnpj,
    RecipientName,
    RecipientState,
    ProtocolNumber,
    ProtocolReceivedAt,
}

/// Matched against the tail of the open-element path, so the same table
/// serves the bare `NFe` root and the `nfeProc` envelope.
const FIELD_PATHS: &[(Field, &[&str])] = &[
    (Field::Number, &["infNFe", "ide", "nNF"]),
    (Field::Series, &["infNFe", "ide", "serie"]),
    (Field::IssuedAt, &["infNFe", "ide", "dhEmi"]),
    (Field::IssuedOn, &["infNFe", "ide", "dEmi"]),
    (Field::IssuerCnpj, &["infNFe", "emit", "CNPJ"]),
    (Field::IssuerName, &["infNFe", "emit", "xNome"]),
    (Field::IssuerTradeName, &["infNFe", "emit", "xFant"]),
    (Field::IssuerStateRegistration, &["infNFe", "emit", "IE"]),
    (Field::IssuerState, &["infNFe", "emit", "enderEmit", "UF"]),
    (Field::RecipientCpf, &["infNFe", "dest", "CPF"]),
    (Field::RecipientCnpj, &["infNFe", "dest", "CNPJ"]),
    (Field::RecipientName, &["infNFe", "dest", "xNome"]),
    (Field::RecipientState, &["infNFe", "dest", "enderDest", "UF"]),
    (Field::ProtocolNumber, &["protNFe", "infProt", "nProt"]),
    (Field::ProtocolReceivedAt, &["protNFe", "infProt", "dhRecbto"]),
];

const ACCESS_KEY_PATH: &str = "infNFe@Id";
const RECIPIENT_ID_PATH: &str = "infNFe/dest/CPF|CNPJ";

impl Field {
    fn path(self) -> String {
        FIELD_PATHS
            .iter()
            .find(|(f, _)| *f == self)
            .map(|(_, segments)| segments.join("/"))
            .unwrap_or_default()
    }

    fn matching(path: &[String]) -> Option<Field> {
        FIELD_PATHS
            .iter()
            .find(|(_, segments)| ends_with(path, segments))
            .map(|(f, _)| *f)
    }
}

fn ends_with(path: &[String], suffix: &[&str]) -> bool {
    path.len() >= suffix.len()
        && path[path.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a == b)
}

#[derive(Default)]
struct NfeParsed {
    seen_inf_nfe: bool,
    access_key_id: Option<String>,
    values: HashMap<Field, String>,
    // Field whose element is currently open and collecting text
    current: Option<Field>,
}

impl NfeParsed {
    fn open_element(&mut self, path: &[String], e: &BytesStart<'_>) -> Result<(), DanfeError> {
        self.current = None;

        let leaf = path.last().map(|s| s.as_str()).unwrap_or("");
        if leaf == "infNFe" && !self.seen_inf_nfe {
            self.seen_inf_nfe = true;
            let id = e
                .try_get_attribute("Id")
                .map_err(|e| DanfeError::MalformedDocument(format!("bad attribute: {e}")))?;
            if let Some(attr) = id {
                let value = attr
                    .unescape_value()
                    .map_err(|e| DanfeError::MalformedDocument(format!("bad attribute: {e}")))?;
                self.access_key_id = Some(value.into_owned());
            }
            return Ok(());
        }

        // First occurrence wins; later duplicates are ignored.
        if let Some(field) = Field::matching(path) {
            if !self.values.contains_key(&field) {
                self.values.insert(field, String::new());
                self.current = Some(field);
            }
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if let Some(field) = self.current {
            if let Some(value) = self.values.get_mut(&field) {
                value.push_str(text);
            }
        }
    }

    fn take(&mut self, field: Field) -> Option<String> {
        self.values.remove(&field)
    }

    fn require(&mut self, field: Field) -> Result<String, DanfeError> {
        self.take(field)
            .ok_or_else(|| DanfeError::missing(field.path()))
    }

    fn into_document(mut self) -> Result<NfeDocument, DanfeError> {
        // Presence first: a missing field is reported as such even when
        // another field would also fail validation.
        if !self.seen_inf_nfe {
            return Err(DanfeError::missing("infNFe"));
        }
        let id = self
            .access_key_id
            .take()
            .ok_or_else(|| DanfeError::missing(ACCESS_KEY_PATH))?;
        let number = self.require(Field::Number)?;
        let series = self.require(Field::Series)?;
        let issued_at_text = match self.take(Field::IssuedAt) {
            Some(text) => text,
            None => self
                .take(Field::IssuedOn)
                .ok_or_else(|| DanfeError::missing(Field::IssuedAt.path()))?,
        };

        let issuer_cnpj = self.require(Field::IssuerCnpj)?;
        let issuer_name = self.require(Field::IssuerName)?;
        let issuer_state = self.require(Field::IssuerState)?;
        let issuer_ie = self
            .take(Field::IssuerStateRegistration)
            .unwrap_or_default();
        let issuer_trade_name = self
            .take(Field::IssuerTradeName)
            .filter(|s| !s.is_empty());

        // The element name is the discriminator; digit count is never consulted.
        let (recipient_kind, recipient_digits) = match (
            self.take(Field::RecipientCpf),
            self.take(Field::RecipientCnpj),
        ) {
            (Some(cpf), None) => (TaxIdKind::Cpf, cpf),
            (None, Some(cnpj)) => (TaxIdKind::Cnpj, cnpj),
            _ => return Err(DanfeError::missing(RECIPIENT_ID_PATH)),
        };
        let recipient_name = self.require(Field::RecipientName)?;
        let recipient_state = self.require(Field::RecipientState)?;

        let protocol = match (
            self.take(Field::ProtocolNumber),
            self.take(Field::ProtocolReceivedAt),
        ) {
            (Some(number), Some(received)) => Some((number, received)),
            (None, None) => None,
            _ => {
                debug!("incomplete infProt block, treating NFe as not authorized");
                None
            }
        };

        // Coercion and invariants.
        let access_key = id.strip_prefix("NFe").unwrap_or(&id).to_string();
        let issued_at = parse_timestamp("issued_at", &issued_at_text)?;

        let mut issuer = IssuerBuilder::new(issuer_cnpj, issuer_name, issuer_state)
            .state_registration(issuer_ie);
        if let Some(trade_name) = issuer_trade_name {
            issuer = issuer.trade_name(trade_name);
        }
        let issuer = issuer.build()?;

        let recipient = RecipientBuilder::new(
            recipient_kind,
            recipient_digits,
            recipient_name,
            recipient_state,
        )
        .build()?;

        let mut builder = NfeDocumentBuilder::new(number, series, access_key, issued_at)
            .issuer(issuer)
            .recipient(recipient);
        if let Some((number, received)) = protocol {
            let authorized_at = parse_timestamp("authorization.authorized_at", &received)?;
            builder = builder.authorization(Authorization::new(number, authorized_at)?);
        }

        let document = builder.build()?;
        debug!(
            access_key = document.access_key(),
            recipient_kind = document.recipient().tax_id().kind().label(),
            "NFe parsed"
        );
        Ok(document)
    }
}

fn parse_timestamp(field: &str, text: &str) -> Result<chrono::NaiveDateTime, DanfeError> {
    parse_nfe_datetime(text).ok_or_else(|| {
        DanfeError::Validation(ValidationError::new(
            field,
            format!("'{text}' is not an NFe date/time"),
        ))
    })
}
