//! Field data escaping for `^FH` fields.
//!
//! With `^FH` active, `_` introduces a two-digit hex byte. Command prefixes
//! (`^`, `~`) and the indicator itself are written as hex so free text taken
//! from the NFe cannot end the field or start a new command.

/// Escape text for a field that is preceded by `^FH`.
pub fn escape_field_data(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '_' => out.push_str("_5F"),
            '^' => out.push_str("_5E"),
            '~' => out.push_str("_7E"),
            _ => out.push(c),
        }
    }
    out
}
