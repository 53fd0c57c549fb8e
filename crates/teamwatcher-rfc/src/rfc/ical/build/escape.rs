//! iCalendar text escaping utilities.

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Backslashes are doubled first, then every line ending (CRLF, LF or a
/// lone CR) becomes a literal `\n`, then commas and semicolons are escaped.
/// The escapes introduced by a later rule are never re-escaped.
#[must_use]
pub fn escape_text(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + 10);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\r' => {
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            _ => result.push(c),
        }
    }
    result
}
