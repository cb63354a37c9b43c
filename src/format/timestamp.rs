//! Timestamp rendering for the image info panel.

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Anything that does not start with a well-formed date and time renders as
/// an empty string; a bad timestamp should never break the info panel.
pub fn format_timestamp(value: &str) -> String {
    let bytes = value.trim().as_bytes();
    if bytes.len() < 16 {
        return String::new();
    }

    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    let well_formed = digits(0..4)
        && bytes[4] == b'-'
        && digits(5..7)
        && bytes[7] == b'-'
        && digits(8..10)
        && (bytes[10] == b'T' || bytes[10] == b't' || bytes[10] == b' ')
        && digits(11..13)
        && bytes[13] == b':'
        && digits(14..16);
    if !well_formed {
        return String::new();
    }

    let number = |range: std::ops::Range<usize>| {
        bytes[range]
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
    };
    let in_range = (1..=12).contains(&number(5..7))
        && (1..=31).contains(&number(8..10))
        && number(11..13) < 24
        && number(14..16) < 60;
    if !in_range {
        return String::new();
    }

    // All checked bytes are ASCII, so byte offsets are char boundaries
    let text = value.trim();
    format!("{} {}", &text[0..10], &text[11..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(format_timestamp("2024-05-01T09:30:00Z"), "2024-05-01 09:30");
        assert_eq!(format_timestamp("2024-05-01T09:30:00.123+07:00"), "2024-05-01 09:30");
        assert_eq!(format_timestamp("2024-05-01 23:59"), "2024-05-01 23:59");
    }

    #[test]
    fn test_garbage_renders_empty() {
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("yesterday"), "");
        assert_eq!(format_timestamp("2024-13-01T09:30:00Z"), "");
        assert_eq!(format_timestamp("2024-05-01T25:30:00Z"), "");
        assert_eq!(format_timestamp("2024/05/01T09:30:00Z"), "");
    }
}
