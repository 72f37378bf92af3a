//! Brazilian federative unit (UF) codes.
//!
//! The 26 states plus the Distrito Federal, as used in the `UF` elements
//! of the NFe layout.

/// Check whether `code` is a known UF code (uppercase, e.g. "SP").
pub fn is_known_state_code(code: &str) -> bool {
    STATE_CODES.binary_search(&code).is_ok()
}

/// Sorted for binary search.
static STATE_CODES: &[&str] = &[
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB", "PE",
    "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert!(is_known_state_code("SP"));
        assert!(is_known_state_code("RJ"));
        assert!(is_known_state_code("DF"));
        assert!(is_known_state_code("TO"));
    }

    #[test]
    fn unknown_states() {
        assert!(!is_known_state_code("XX"));
        assert!(!is_known_state_code(""));
        assert!(!is_known_state_code("sp"));
        assert!(!is_known_state_code("SPA"));
        // "EX" is the NFe code for foreign addresses, not a federative unit
        assert!(!is_known_state_code("EX"));
    }

    #[test]
    fn list_is_sorted() {
        for window in STATE_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "state codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(STATE_CODES.len(), 27);
    }
}
