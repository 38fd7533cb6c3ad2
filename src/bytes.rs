//! Human-readable rendering of byte counts for group labels.

const UNITS: &[(u64, &str)] = &[
    (1 << 50, "PB"),
    (1 << 40, "TB"),
    (1 << 30, "GB"),
    (1 << 20, "MB"),
    (1 << 10, "KB"),
];

/// Formats a byte count with binary-unit thresholds and up to two decimal
/// places, trailing zeros trimmed.
///
/// # Examples
///
/// ```rust
/// use json_foam::bytes::format_bytes;
/// assert_eq!(format_bytes(12), "12B");
/// assert_eq!(format_bytes(1536), "1.5KB");
/// ```
pub fn format_bytes(size: usize) -> String {
    let size = size as u64;
    for &(factor, unit) in UNITS {
        if size >= factor {
            let scaled = size as f64 / factor as f64;
            let mut text = format!("{:.2}", scaled);
            if text.contains('.') {
                text = text
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string();
            }
            return format!("{}{}", text, unit);
        }
    }
    format!("{}B", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_kilobyte_counts_render_as_plain_bytes() {
        assert_eq!(format_bytes(0), "0B");
        assert_eq!(format_bytes(1), "1B");
        assert_eq!(format_bytes(1023), "1023B");
    }

    #[test]
    fn whole_units_drop_their_decimals() {
        assert_eq!(format_bytes(1024), "1KB");
        assert_eq!(format_bytes(1 << 20), "1MB");
        assert_eq!(format_bytes(3 << 30), "3GB");
    }

    #[test]
    fn fractional_units_keep_up_to_two_decimals() {
        assert_eq!(format_bytes(1536), "1.5KB");
        assert_eq!(format_bytes(1200), "1.17KB");
        assert_eq!(format_bytes(1_258_291), "1.2MB");
    }
}
