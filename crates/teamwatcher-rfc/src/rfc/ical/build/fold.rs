//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit.
///
/// Returns the physical lines without terminators. Every line after the
/// first starts with a single space, and the space counts toward that
/// line's 75 octets. Splits only happen on UTF-8 character boundaries,
/// found by stepping back from the limit one byte at a time.
#[must_use]
pub fn fold_line(line: &str) -> Vec<String> {
    if line.len() <= MAX_LINE_OCTETS {
        return vec![line.to_owned()];
    }

    let mut result = Vec::with_capacity(line.len() / (MAX_LINE_OCTETS - 1) + 1);
    let mut rest = line;
    let mut first_line = true;

    loop {
        // Continuation lines have one less octet available (the leading space)
        let max_len = if first_line {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - 1
        };
        let prefix = if first_line { "" } else { " " };

        if rest.len() <= max_len {
            result.push(format!("{prefix}{rest}"));
            break;
        }

        let mut end = max_len;
        while end > 0 && !rest.is_char_boundary(end) {
            end -= 1;
        }

        if end == 0 {
            // Unreachable for UTF-8 (a char is at most 4 octets) but keeps the
            // loop making progress no matter what.
            end = rest
                .char_indices()
                .nth(1)
                .map_or(rest.len(), |(idx, _)| idx);
        }

        let (head, tail) = rest.split_at(end);
        result.push(format!("{prefix}{head}"));

        rest = tail;
        first_line = false;
    }

    result
}
