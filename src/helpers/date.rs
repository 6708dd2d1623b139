use chrono::NaiveDateTime;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a wire date as a naive timestamp, ignoring the trailing `Z` marker.
pub fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    let value = value.strip_suffix('Z').unwrap_or(value);
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub fn format_naive(value: &NaiveDateTime) -> String {
    value.format(ISO_FORMAT).to_string()
}

/// Removes a trailing `+HH:MM` or `-HH:MM` offset, leaving the wall-clock digits.
pub fn strip_utc_offset(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() < 6 {
        return value;
    }
    let suffix = &bytes[bytes.len() - 6..];
    let is_offset = matches!(suffix[0], b'+' | b'-')
        && suffix[1].is_ascii_digit()
        && suffix[2].is_ascii_digit()
        && suffix[3] == b':'
        && suffix[4].is_ascii_digit()
        && suffix[5].is_ascii_digit();
    if is_offset {
        &value[..value.len() - 6]
    } else {
        value
    }
}
