use chrono::NaiveDateTime;

use super::error::DanfeError;
use super::types::*;
use super::validation;

/// Builder for a validated [`NfeDocument`].
///
/// ```
/// use chrono::NaiveDate;
/// use danfe::core::*;
///
/// let issued = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// let nfe = NfeDocumentBuilder::new("123", "1", "35250912345678000199550010000001231000001234", issued)
///     .issuer(IssuerBuilder::new("12345678000199", "ACME Comercio LTDA", "SP")
///         .state_registration("123456789")
///         .build()
///         .unwrap())
///     .recipient(RecipientBuilder::new(TaxIdKind::Cpf, "12345678901", "João da Silva", "RJ")
///         .build()
///         .unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(nfe.summary(), "NFe 123/1 - Emitente: ACME Comercio LTDA - Destinatário: João da Silva");
/// ```
pub struct NfeDocumentBuilder {
    number: String,
    series: String,
    access_key: String,
    issued_at: NaiveDateTime,
    issuer: Option<Issuer>,
    recipient: Option<Recipient>,
    authorization: Option<Authorization>,
}

impl NfeDocumentBuilder {
    pub fn new(
        number: impl Into<String>,
        series: impl Into<String>,
        access_key: impl Into<String>,
        issued_at: NaiveDateTime,
    ) -> Self {
        Self {
            number: number.into(),
            series: series.into(),
            access_key: access_key.into(),
            issued_at,
            issuer: None,
            recipient: None,
            authorization: None,
        }
    }

    pub fn issuer(mut self, issuer: Issuer) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Build the document, checking header invariants. Issuer and recipient
    /// are required.
    pub fn build(self) -> Result<NfeDocument, DanfeError> {
        let issuer = self
            .issuer
            .ok_or_else(|| DanfeError::invalid("issuer", "issuer is required"))?;
        let recipient = self
            .recipient
            .ok_or_else(|| DanfeError::invalid("recipient", "recipient is required"))?;

        validation::check_non_empty("number", &self.number)?;
        validation::check_non_empty("series", &self.series)?;
        validation::check_access_key("access_key", &self.access_key)?;

        Ok(NfeDocument {
            number: self.number,
            series: self.series,
            access_key: self.access_key,
            issued_at: self.issued_at,
            issuer,
            recipient,
            authorization: self.authorization,
        })
    }
}

/// Builder for the issuing party. The tax identifier is always a CNPJ.
pub struct IssuerBuilder {
    cnpj: String,
    name: String,
    trade_name: Option<String>,
    state_registration: String,
    state: String,
}

impl IssuerBuilder {
    pub fn new(cnpj: impl Into<String>, name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            cnpj: cnpj.into(),
            name: name.into(),
            trade_name: None,
            state_registration: String::new(),
            state: state.into(),
        }
    }

    pub fn trade_name(mut self, trade_name: impl Into<String>) -> Self {
        self.trade_name = Some(trade_name.into());
        self
    }

    pub fn state_registration(mut self, ie: impl Into<String>) -> Self {
        self.state_registration = ie.into();
        self
    }

    pub fn build(self) -> Result<Issuer, DanfeError> {
        let tax_id = TaxId::new(TaxIdKind::Cnpj, self.cnpj, "issuer.tax_id")?;
        validation::check_non_empty("issuer.name", &self.name)?;
        validation::check_state("issuer.state", &self.state)?;

        Ok(Issuer {
            tax_id,
            name: self.name,
            trade_name: self.trade_name,
            state_registration: self.state_registration,
            state: self.state,
        })
    }
}

/// Builder for the receiving party; the identifier kind is explicit.
pub struct RecipientBuilder {
    kind: TaxIdKind,
    digits: String,
    name: String,
    state: String,
}

impl RecipientBuilder {
    pub fn new(
        kind: TaxIdKind,
        digits: impl Into<String>,
        name: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            digits: digits.into(),
            name: name.into(),
            state: state.into(),
        }
    }

    pub fn build(self) -> Result<Recipient, DanfeError> {
        let tax_id = TaxId::new(self.kind, self.digits, "recipient.tax_id")?;
        validation::check_non_empty("recipient.name", &self.name)?;
        validation::check_state("recipient.state", &self.state)?;

        Ok(Recipient {
            tax_id,
            name: self.name,
            state: self.state,
        })
    }
}
