use chrono::{NaiveDate, NaiveDateTime};
use danfe::core::*;

const KEY: &str = "35250912345678000199550010000001231000001234";

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn issuer() -> Issuer {
    IssuerBuilder::new("12345678000199", "ACME Comercio LTDA", "SP")
        .trade_name("ACME")
        .state_registration("123456789")
        .build()
        .unwrap()
}

fn recipient() -> Recipient {
    RecipientBuilder::new(TaxIdKind::Cpf, "12345678901", "João da Silva", "RJ")
        .build()
        .unwrap()
}

fn validation_field(err: DanfeError) -> String {
    match err {
        DanfeError::Validation(e) => e.field,
        other => panic!("expected Validation, got {other:?}"),
    }
}

// --- Builders ---

#[test]
fn build_full_document() {
    let auth = Authorization::new("135250001234567", ts(2025, 9, 1, 10, 35, 12)).unwrap();
    let nfe = NfeDocumentBuilder::new("123", "1", KEY, ts(2025, 9, 1, 10, 30, 0))
        .issuer(issuer())
        .recipient(recipient())
        .authorization(auth.clone())
        .build()
        .unwrap();

    assert_eq!(nfe.issuer().trade_name(), Some("ACME"));
    assert_eq!(nfe.issuer().state_registration(), "123456789");
    assert_eq!(nfe.authorization(), Some(&auth));
    assert_eq!(
        nfe.summary(),
        "NFe 123/1 - Emitente: ACME Comercio LTDA - Destinatário: João da Silva"
    );
}

#[test]
fn issuer_is_required() {
    let err = NfeDocumentBuilder::new("123", "1", KEY, ts(2025, 9, 1, 0, 0, 0))
        .recipient(recipient())
        .build()
        .unwrap_err();
    assert_eq!(validation_field(err), "issuer");
}

#[test]
fn recipient_is_required() {
    let err = NfeDocumentBuilder::new("123", "1", KEY, ts(2025, 9, 1, 0, 0, 0))
        .issuer(issuer())
        .build()
        .unwrap_err();
    assert_eq!(validation_field(err), "recipient");
}

#[test]
fn blank_number_and_series_are_rejected() {
    let build = |number: &str, series: &str| {
        NfeDocumentBuilder::new(number, series, KEY, ts(2025, 9, 1, 0, 0, 0))
            .issuer(issuer())
            .recipient(recipient())
            .build()
    };
    assert_eq!(validation_field(build("", "1").unwrap_err()), "number");
    assert_eq!(validation_field(build("123", "  ").unwrap_err()), "series");
}

#[test]
fn access_key_must_be_44_digits() {
    let build = |key: &str| {
        NfeDocumentBuilder::new("123", "1", key, ts(2025, 9, 1, 0, 0, 0))
            .issuer(issuer())
            .recipient(recipient())
            .build()
    };
    assert_eq!(validation_field(build(&KEY[..43]).unwrap_err()), "access_key");
    let lettered = format!("{}A", &KEY[..43]);
    assert_eq!(validation_field(build(&lettered).unwrap_err()), "access_key");
    assert!(build(KEY).is_ok());
}

#[test]
fn issuer_cnpj_with_13_digits() {
    let err = IssuerBuilder::new("1234567800019", "ACME", "SP")
        .build()
        .unwrap_err();
    match err {
        DanfeError::Validation(e) => {
            assert_eq!(e.field, "issuer.tax_id");
            assert_eq!(e.message, "CNPJ must have exactly 14 digits, got 13");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn punctuated_cnpj_is_rejected() {
    let err = IssuerBuilder::new("12.345.678/0001-99", "ACME", "SP")
        .build()
        .unwrap_err();
    assert_eq!(validation_field(err), "issuer.tax_id");
}

#[test]
fn recipient_kind_decides_length() {
    assert!(
        RecipientBuilder::new(TaxIdKind::Cnpj, "11222333000181", "Cliente", "MG")
            .build()
            .is_ok()
    );
    let err = RecipientBuilder::new(TaxIdKind::Cpf, "11222333000181", "Cliente", "MG")
        .build()
        .unwrap_err();
    assert_eq!(validation_field(err), "recipient.tax_id");
}

#[test]
fn state_codes() {
    for uf in ["AC", "DF", "SP", "TO"] {
        assert!(IssuerBuilder::new("12345678000199", "ACME", uf).build().is_ok());
    }
    for uf in ["sp", "S", "SPP", "XX", ""] {
        let err = IssuerBuilder::new("12345678000199", "ACME", uf)
            .build()
            .unwrap_err();
        assert_eq!(validation_field(err), "issuer.state", "{uf}");
    }
    assert!(is_known_state_code("RS"));
    assert!(!is_known_state_code("ZZ"));
}

#[test]
fn blank_names_are_rejected() {
    let err = IssuerBuilder::new("12345678000199", " ", "SP")
        .build()
        .unwrap_err();
    assert_eq!(validation_field(err), "issuer.name");

    let err = RecipientBuilder::new(TaxIdKind::Cpf, "12345678901", "", "RJ")
        .build()
        .unwrap_err();
    assert_eq!(validation_field(err), "recipient.name");
}

#[test]
fn protocol_number_is_required() {
    let err = Authorization::new("", ts(2025, 9, 1, 0, 0, 0)).unwrap_err();
    assert!(matches!(err, DanfeError::Validation(_)));
}

#[test]
fn protocol_number_must_be_15_digits() {
    for bad in ["13525000123456", "1352500012345678", "13525000123456X", "1^XZ^XA^FDEVIL"] {
        let err = Authorization::new(bad, ts(2025, 9, 1, 0, 0, 0)).unwrap_err();
        assert!(matches!(err, DanfeError::Validation(_)), "{bad}");
    }
}

// --- Formatting ---

#[test]
fn tax_id_formatting() {
    assert_eq!(
        format_tax_id("12345678901", TaxIdKind::Cpf).unwrap(),
        "123.456.789-01"
    );
    assert_eq!(
        format_tax_id("12345678000199", TaxIdKind::Cnpj).unwrap(),
        "12.345.678/0001-99"
    );
    assert!(matches!(
        format_tax_id("12345678901", TaxIdKind::Cnpj),
        Err(DanfeError::MalformedInput(_))
    ));
    assert!(matches!(
        format_tax_id("1234567890a", TaxIdKind::Cpf),
        Err(DanfeError::MalformedInput(_))
    ));
}

#[test]
fn date_formatting() {
    let t = ts(2025, 9, 1, 8, 5, 3);
    assert_eq!(format_date(t), "01/09/2025");
    assert_eq!(format_datetime(t), "01/09/2025 08:05:03");
}

#[test]
fn access_key_grouping() {
    assert_eq!(
        format_access_key(KEY),
        "3525 0912 3456 7800 0199 5500 1000 0001 2310 0000 1234"
    );
}

#[test]
fn nfe_datetime_parsing() {
    assert_eq!(
        parse_nfe_datetime("2025-09-01T23:59:59-03:00"),
        Some(ts(2025, 9, 1, 23, 59, 59))
    );
    assert_eq!(
        parse_nfe_datetime("2025-09-01T10:30:00"),
        Some(ts(2025, 9, 1, 10, 30, 0))
    );
    assert_eq!(parse_nfe_datetime("2025-09-01"), Some(ts(2025, 9, 1, 0, 0, 0)));
    assert_eq!(parse_nfe_datetime("01/09/2025"), None);
    assert_eq!(parse_nfe_datetime(""), None);
}

// --- Errors ---

#[test]
fn error_messages() {
    let missing = DanfeError::MissingField {
        path: "infNFe/emit/CNPJ".into(),
    };
    assert_eq!(missing.to_string(), "missing field: infNFe/emit/CNPJ");

    let invalid = DanfeError::from(ValidationError::new("issuer.state", "bad"));
    assert_eq!(invalid.to_string(), "validation failed: issuer.state: bad");
}
