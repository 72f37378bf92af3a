use chrono::NaiveDateTime;
use serde::Serialize;

use super::error::DanfeError;
use super::validation;

/// Brazilian tax identifier kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaxIdKind {
    /// Cadastro de Pessoas Físicas, the 11-digit individual identifier.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, the 14-digit organizational identifier.
    Cnpj,
}

impl TaxIdKind {
    /// Number of digits an identifier of this kind must have.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Label printed in front of the identifier ("CPF" / "CNPJ").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

/// A digits-only tax identifier whose length matches its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaxId {
    kind: TaxIdKind,
    digits: String,
}

impl TaxId {
    /// Validate `digits` against `kind`. `field` names the value in the error.
    pub fn new(
        kind: TaxIdKind,
        digits: impl Into<String>,
        field: &str,
    ) -> Result<Self, DanfeError> {
        let digits = digits.into();
        validation::check_digits(field, &digits, kind.digit_count(), kind.label())?;
        Ok(Self { kind, digits })
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }
}

/// Emitente: the organization issuing the NFe. Always identified by CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issuer {
    pub(crate) tax_id: TaxId,
    pub(crate) name: String,
    pub(crate) trade_name: Option<String>,
    pub(crate) state_registration: String,
    pub(crate) state: String,
}

impl Issuer {
    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    /// Razão social.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nome fantasia, when the document carries one.
    pub fn trade_name(&self) -> Option<&str> {
        self.trade_name.as_deref()
    }

    /// Inscrição estadual. May be empty.
    pub fn state_registration(&self) -> &str {
        &self.state_registration
    }

    /// Federative unit code (UF), e.g. "SP".
    pub fn state(&self) -> &str {
        &self.state
    }
}

/// Destinatário: the party receiving the NFe, identified by CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub(crate) tax_id: TaxId,
    pub(crate) name: String,
    pub(crate) state: String,
}

impl Recipient {
    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

/// Authorization protocol issued by SEFAZ for the NFe.
///
/// The protocol number is 15 digits; it is printed without `^FH` escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authorization {
    pub(crate) protocol_number: String,
    pub(crate) authorized_at: NaiveDateTime,
}

impl Authorization {
    pub fn new(
        protocol_number: impl Into<String>,
        authorized_at: NaiveDateTime,
    ) -> Result<Self, DanfeError> {
        let protocol_number = protocol_number.into();
        validation::check_protocol_number("authorization.protocol_number", &protocol_number)?;
        Ok(Self {
            protocol_number,
            authorized_at,
        })
    }

    pub fn protocol_number(&self) -> &str {
        &self.protocol_number
    }

    pub fn authorized_at(&self) -> NaiveDateTime {
        self.authorized_at
    }
}

/// The NFe aggregate: header, both parties and the optional authorization.
///
/// Built through [`NfeDocumentBuilder`](super::NfeDocumentBuilder), which
/// enforces every invariant; there is no way to obtain an unvalidated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NfeDocument {
    pub(crate) number: String,
    pub(crate) series: String,
    pub(crate) access_key: String,
    pub(crate) issued_at: NaiveDateTime,
    pub(crate) issuer: Issuer,
    pub(crate) recipient: Recipient,
    pub(crate) authorization: Option<Authorization>,
}

impl NfeDocument {
    /// nNF.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn series(&self) -> &str {
        &self.series
    }

    /// 44-digit chave de acesso.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }

    pub fn issuer(&self) -> &Issuer {
        &self.issuer
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn authorization(&self) -> Option<&Authorization> {
        self.authorization.as_ref()
    }

    /// One-line description, e.g. "NFe 123/1 - Emitente: ACME - Destinatário: João".
    pub fn summary(&self) -> String {
        format!(
            "NFe {}/{} - Emitente: {} - Destinatário: {}",
            self.number, self.series, self.issuer.name, self.recipient.name
        )
    }
}

/// A rendered DANFE label together with the NFe it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanfeLabel {
    invoice: NfeDocument,
    markup: String,
}

impl DanfeLabel {
    /// Called by renderers once the markup is complete.
    pub fn new(invoice: NfeDocument, markup: String) -> Self {
        Self { invoice, markup }
    }

    pub fn invoice(&self) -> &NfeDocument {
        &self.invoice
    }

    /// The label markup, ready to be sent to the printer.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn summary(&self) -> String {
        self.invoice.summary()
    }

    pub fn into_parts(self) -> (NfeDocument, String) {
        (self.invoice, self.markup)
    }
}
