use std::fmt::Write;

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, byte by byte over UTF-8.
/// This is the escaping expected in `mailto:` query values.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}

/// Concatenates the ASCII digits of `text` and parses them, so `"1,200+"` gives 1200.
/// Returns `None` when there are no digits or the number does not fit.
pub fn digits_value(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Case-folded, trimmed form of a search query.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

pub fn text_matches_search(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(query)
}
