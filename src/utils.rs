use std::fmt;


// Formats an error that may have a message and/or a source error
pub fn format_error(fmt: &mut fmt::Formatter<'_>, title: &str, message: Option<&str>, source: Option<&dyn std::error::Error>) -> fmt::Result {
    // empty messages are formatted the same as no message
    let message =
        if let Some("") = message { None }
        else { message };

    match (message, source) {
        (None, None) => fmt.write_str(title),
        (None, Some(error)) => write!(fmt, "{}: {}", title, error),
        (Some(message), None) => write!(fmt, "{}: {}", title, message),
        (Some(message), Some(error)) => write!(fmt, "{}: {}: {}", title, message, error),
    }
}


/// Parses a whitespace separated list of hex bytes, e.g. `"20 00 0a"`.
/// An optional `0x` prefix is accepted on each byte.
pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, std::num::ParseIntError> {
    text.split_whitespace()
        .map(|word| word.strip_prefix("0x").unwrap_or(word))
        .map(|digits| u8::from_str_radix(digits, 16))
        .collect()
}
