//! Byte-count formatting
//!
//! Fixed-point, binary-scaled rendering of a byte count. Pure function of
//! the input; one decimal digit using Rust's default nearest-value float
//! rounding.

/// Ordered unit prefixes; scaling steps by 1024 through the sequence
const UNIT_PREFIXES: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];

/// Render a byte count as a unit-scaled string with one decimal digit,
/// e.g. `0 -> "0.0B"`, `1536 -> "1.5KiB"`. Should the magnitude still be
/// 1024 or more after the last prefix, the terminal `Yi` is used without
/// further scaling.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for prefix in UNIT_PREFIXES {
        if value < 1024.0 {
            return format!("{value:.1}{prefix}B");
        }
        value /= 1024.0;
    }
    format!("{value:.1}YiB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_no_prefix() {
        assert_eq!(format_bytes(0), "0.0B");
    }

    #[test]
    fn test_exact_kibibyte() {
        assert_eq!(format_bytes(1024), "1.0KiB");
    }

    #[test]
    fn test_fractional_kibibyte() {
        assert_eq!(format_bytes(1536), "1.5KiB");
    }

    #[test]
    fn test_stays_in_bytes_below_threshold() {
        assert_eq!(format_bytes(512), "512.0B");
        assert_eq!(format_bytes(1023), "1023.0B");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(format_bytes(1024 * 1024), "1.0MiB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.0GiB");
        assert_eq!(format_bytes(3 * 1024_u64.pow(4)), "3.0TiB");
        assert_eq!(format_bytes(u64::MAX), "16.0EiB");
    }

    #[test]
    fn test_magnitude_always_scaled_below_1024() {
        // every representable u64 lands on a prefix before the sequence ends
        for bytes in [
            1_u64,
            999,
            1024,
            10_000,
            123_456_789,
            1024_u64.pow(3),
            1024_u64.pow(5) + 7,
            u64::MAX,
        ] {
            let rendered = format_bytes(bytes);
            let digits: String = rendered
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let magnitude: f64 = digits.parse().unwrap();
            assert!(
                (0.0..1024.0).contains(&magnitude),
                "{bytes} rendered as {rendered}"
            );
            let suffix = &rendered[digits.len()..];
            assert!(
                UNIT_PREFIXES
                    .iter()
                    .any(|p| suffix == format!("{p}B")),
                "unexpected suffix in {rendered}"
            );
        }
    }
}
