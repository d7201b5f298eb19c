//! Duration and rate formatting helpers.

use std::time::Duration;

/// Format a duration as seconds with millisecond precision, e.g. `0.012 s`.
pub(crate) fn format_seconds(elapsed: Duration) -> String {
    format!("{:.3} s", elapsed.as_secs_f64())
}

/// Format the mean time per record in nanoseconds, e.g. `12_345.6 ns/msg`.
///
/// Returns `None` when there are no records to average over.
pub(crate) fn format_per_record(elapsed: Duration, records: usize) -> Option<String> {
    if records == 0 {
        return None;
    }
    let ns = elapsed.as_nanos() as f64 / records as f64;
    Some(format!("{} ns/msg", group_thousands(&format!("{ns:.1}"))))
}

/// Insert `_` between groups of three digits in the integer part of a decimal.
fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (number, None),
    };

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('_');
        }
        grouped.push(ch);
    }

    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
