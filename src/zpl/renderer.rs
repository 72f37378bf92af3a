use serde::{Deserialize, Serialize};

use super::escape::escape_field_data;
use crate::core::*;

/// How the recipient's tax identifier appears on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientDocument {
    /// Punctuated CPF/CNPJ.
    #[default]
    Shown,
    /// A single `-` in place of the identifier.
    Masked,
}

/// DANFE Simplificado label renderer.
///
/// Renders a fixed ZPL template identified by [`LAYOUT_VERSION`](super::LAYOUT_VERSION).
/// The authorization lines are emitted only when the NFe carries a protocol.
#[derive(Debug, Clone, Default)]
pub struct ZplRenderer<D = BrazilianDateFormatter, F = BrazilianDocumentFormatter> {
    dates: D,
    documents: F,
    recipient_document: RecipientDocument,
}

impl ZplRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D, F> ZplRenderer<D, F> {
    /// Use other presentation rules for dates and identifiers.
    pub fn with_formatters(dates: D, documents: F) -> Self {
        Self {
            dates,
            documents,
            recipient_document: RecipientDocument::default(),
        }
    }

    pub fn recipient_document(mut self, mode: RecipientDocument) -> Self {
        self.recipient_document = mode;
        self
    }
}

impl<D: DateFormatter, F: DocumentFormatter> ZplRenderer<D, F> {
    /// Render the label markup without taking ownership of the document.
    pub fn render_zpl(&self, nfe: &NfeDocument) -> Result<String, DanfeError> {
        let issuer = nfe.issuer();
        let recipient = nfe.recipient();

        let issued_on = self.dates.format_date(nfe.issued_at());
        let issuer_cnpj = self
            .documents
            .format_tax_id(issuer.tax_id().digits(), issuer.tax_id().kind())?;
        let recipient_doc = match self.recipient_document {
            RecipientDocument::Shown => self
                .documents
                .format_tax_id(recipient.tax_id().digits(), recipient.tax_id().kind())?,
            RecipientDocument::Masked => "-".to_string(),
        };

        let mut lines: Vec<String> = Vec::with_capacity(32);
        lines.push("^XA".into());
        lines.push("^CI28".into());
        lines.push("^MCY".into());

        // Header box
        lines.push("^FO30,20^GB265,130,3^FS".into());
        lines.push("^FO40,40^A0N,20,20^FD1 - Saida^FS".into());
        lines.push(format!(
            "^FO40,70^A0N,20,20^FH^FDNumero {}/Serie {}^FS",
            escape_field_data(nfe.number()),
            escape_field_data(nfe.series())
        ));
        lines.push(format!("^FO40,100^A0N,20,20^FH^FDEmissao {issued_on}^FS"));

        // Access key and authorization
        lines.push("^FO440,40^A0N,30,30^FDChave de acesso^FS".into());
        lines.push(format!("^FO320,70^A0N,20,20^FD{}^FS", nfe.access_key()));
        if let Some(auth) = nfe.authorization() {
            let authorized_at = self.dates.format_datetime(auth.authorized_at());
            lines.push("^FO340,100^A0N,30,30^FH^FDProtocolo de Autorizacao de uso^FS".into());
            lines.push(format!(
                "^FO395,130^A0N,20,20^FD{} {authorized_at}^FS",
                auth.protocol_number()
            ));
        }
        lines.push(format!(
            "^FO135,190^BY2,,0^BCN,150,Y,N,N^FD>;{}^FS",
            nfe.access_key()
        ));
        lines.push("^FO0,355^A0N,25,25^FB675,1,0,R^FD^FS".into());
        lines.push("^FO0,380^GB800,1,3^FS".into());

        // Issuer
        lines.push(format!(
            "^FO40,400^A0N,20,20^FH^FDREMETENTE: {}^FS",
            escape_field_data(issuer.name())
        ));
        lines.push(format!("^FO40,430^A0N,20,20^FDCNPJ: {issuer_cnpj}^FS"));
        lines.push(format!(
            "^FO310,430^A0N,20,20^FH^FDINSCRICAO ESTADUAL: {}^FS",
            escape_field_data(issuer.state_registration())
        ));
        lines.push(format!("^FO690,430^A0N,20,20^FDUF: {}^FS", issuer.state()));

        // Recipient
        lines.push(format!(
            "^FO40,500^A0N,20,20^FH^FDDESTINATARIO: {}^FS",
            escape_field_data(recipient.name())
        ));
        lines.push(format!(
            "^FO40,530^A0N,20,20^FD{}: {recipient_doc}^FS",
            recipient.tax_id().kind().label()
        ));
        lines.push(format!("^FO690,530^A0N,20,20^FDUF: {}^FS", recipient.state()));
        lines.push("^FO40,560^A0N,20,20^FDDANFE SIMPLIFICADO^FS".into());
        lines.push("^FO0,600^GB800,1,3^FS".into());

        // Additional data
        lines.push("^FO0,1000^GB800,1,3^FS".into());
        lines.push("^FO40,1020^A0N,25,25^FDDADOS ADICIONAIS^FS".into());
        lines.push("^FO40,1050^A0N,20,20^FB740,8,3,L^FH^FD^FS".into());
        lines.push("^XZ".into());

        Ok(lines.join("\n"))
    }
}

impl<D: DateFormatter, F: DocumentFormatter> LabelRenderer for ZplRenderer<D, F> {
    fn render(&self, document: NfeDocument) -> Result<DanfeLabel, DanfeError> {
        let markup = self.render_zpl(&document)?;
        Ok(DanfeLabel::new(document, markup))
    }
}

/// Render the standard DANFE Simplificado label for `nfe`.
pub fn to_danfe_zpl(nfe: &NfeDocument) -> Result<String, DanfeError> {
    ZplRenderer::new().render_zpl(nfe)
}
