//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Minutes as "HHh MMm" (long) or "HH:MM" (short); fractions are rounded
/// to the nearest minute.
pub fn mins2readable(mins: f64, short: bool) -> String {
    let total = mins.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let abs_m = total.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Human label for a time value in the given unit.
pub fn describe_time(time: f64, unit: &str) -> String {
    match unit {
        "minute" => mins2readable(time, false),
        "second" => mins2readable(time / 60.0, false),
        "hour" => mins2readable(time * 60.0, false),
        other => format!("{time} {other}"),
    }
}
