//! Small parsing and formatting helpers.

use crate::error::{CoreError, CoreResult};

/// Parses a start time in `H:M:S`, `M:S` or plain-seconds form into
/// seconds.
///
/// Each `:`-separated part folds into the accumulator as `acc * 60 +
/// part`, so out-of-range minute or second parts are tolerated the same
/// way the decoder itself tolerates them.
pub fn parse_start_time(start: &str) -> CoreResult<f64> {
    let mut seconds = 0.0;
    for part in start.split(':') {
        let value: f64 = part
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("invalid start time: '{start}'")))?;
        seconds = seconds * 60.0 + value;
    }
    Ok(seconds)
}

/// Formats a byte count for human consumption.
///
/// The unit advances once a value reaches 1000 but each step divides by
/// 1024; the mismatch is long-standing reported behavior and is kept.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["b", "Kb", "Mb", "Gb", "Tb", "Pb"];

    let mut size = bytes as f64;
    let mut index = 0;
    loop {
        if size.abs() < 1000.0 {
            break;
        }
        size /= 1024.0;
        if index == UNITS.len() - 1 {
            break;
        }
        index += 1;
    }
    format!("{size:.2} {}", UNITS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_seconds() {
        assert_eq!(parse_start_time("90").unwrap(), 90.0);
        assert_eq!(parse_start_time("0").unwrap(), 0.0);
        assert_eq!(parse_start_time("12.5").unwrap(), 12.5);
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(parse_start_time("1:30").unwrap(), 90.0);
        assert_eq!(parse_start_time("10:00").unwrap(), 600.0);
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(parse_start_time("0:1:30").unwrap(), 90.0);
        assert_eq!(parse_start_time("1:02:03").unwrap(), 3723.0);
    }

    #[test]
    fn out_of_range_parts_fold_through() {
        // 90 seconds in the seconds slot is still a minute and a half.
        assert_eq!(parse_start_time("1:90").unwrap(), 150.0);
    }

    #[test]
    fn malformed_start_times_are_rejected() {
        for arg in ["", "abc", "1:xx", "1:", ":30", "1::30"] {
            assert!(
                matches!(parse_start_time(arg), Err(CoreError::Validation(_))),
                "expected '{arg}' to be rejected"
            );
        }
    }

    #[test]
    fn sizes_below_the_rollover_stay_in_bytes() {
        assert_eq!(format_size(0), "0.00 b");
        assert_eq!(format_size(500), "500.00 b");
        assert_eq!(format_size(999), "999.00 b");
    }

    #[test]
    fn rollover_happens_at_1000_with_a_1024_divisor() {
        assert_eq!(format_size(1000), "0.98 Kb");
        assert_eq!(format_size(2048), "2.00 Kb");
    }

    #[test]
    fn larger_units() {
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 Mb");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 Gb");
    }
}
