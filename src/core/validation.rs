//! Field-level invariant checks shared by the builders.
//!
//! Each check returns the first violation as a [`ValidationError`] keyed by
//! the dot-separated field path it was given.

use super::error::ValidationError;
use super::states::is_known_state_code;

/// Length of the NFe chave de acesso.
pub const ACCESS_KEY_LEN: usize = 44;

/// Length of a SEFAZ authorization protocol number (nProt).
pub const PROTOCOL_NUMBER_LEN: usize = 15;

pub(crate) fn check_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn check_digits(
    field: &str,
    value: &str,
    expected_len: usize,
    what: &str,
) -> Result<(), ValidationError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("{what} must contain only digits, got '{value}'"),
        ));
    }
    if value.len() != expected_len {
        return Err(ValidationError::new(
            field,
            format!(
                "{what} must have exactly {expected_len} digits, got {}",
                value.len()
            ),
        ));
    }
    Ok(())
}

pub(crate) fn check_state(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::new(
            field,
            format!("state must be exactly 2 uppercase letters, got '{value}'"),
        ));
    }
    if !is_known_state_code(value) {
        return Err(ValidationError::new(
            field,
            format!("'{value}' is not a Brazilian federative unit"),
        ));
    }
    Ok(())
}

pub(crate) fn check_access_key(field: &str, value: &str) -> Result<(), ValidationError> {
    check_digits(field, value, ACCESS_KEY_LEN, "access key")
}

pub(crate) fn check_protocol_number(field: &str, value: &str) -> Result<(), ValidationError> {
    check_digits(field, value, PROTOCOL_NUMBER_LEN, "protocol number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_accepts_exact_length() {
        assert!(check_digits("f", "12345678901", 11, "CPF").is_ok());
    }

    #[test]
    fn digits_rejects_wrong_length() {
        let err = check_digits("issuer.tax_id", "1234567800019", 14, "CNPJ").unwrap_err();
        assert_eq!(err.field, "issuer.tax_id");
        assert!(err.message.contains("exactly 14 digits"));
        assert!(err.message.contains("got 13"));
    }

    #[test]
    fn digits_rejects_punctuation() {
        let err = check_digits("f", "123.456.789-01", 11, "CPF").unwrap_err();
        assert!(err.message.contains("only digits"));
    }

    #[test]
    fn non_empty_rejects_whitespace() {
        assert!(check_non_empty("name", "   ").is_err());
        assert!(check_non_empty("name", "ACME").is_ok());
    }

    #[test]
    fn state_rules() {
        assert!(check_state("s", "SP").is_ok());
        assert!(check_state("s", "sp").is_err());
        assert!(check_state("s", "S").is_err());
        assert!(check_state("s", "ZZ").is_err());
    }

    #[test]
    fn access_key_length() {
        assert!(check_access_key("k", &"1".repeat(44)).is_ok());
        assert!(check_access_key("k", &"1".repeat(43)).is_err());
        assert!(check_access_key("k", &"1".repeat(45)).is_err());
    }

    #[test]
    fn protocol_number_is_15_digits() {
        assert!(check_protocol_number("p", "135250001234567").is_ok());
        assert!(check_protocol_number("p", "13525000123456").is_err());
        assert!(check_protocol_number("p", "1^XZ^XA^FDEVIL").is_err());
        assert!(check_protocol_number("p", "").is_err());
    }
}
