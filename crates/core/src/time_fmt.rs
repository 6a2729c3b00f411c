// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared human-readable formatting for timeline durations.

/// Format a duration given in (fractional) minutes: `"45s"`, `"2.5m"`, `"1h30m"`.
///
/// Negative values (clock skew between writers) render with a leading `-`.
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 0.0 {
        return format!("-{}", format_minutes(-minutes));
    }
    let secs = (minutes * 60.0).round() as u64;
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        let whole = secs / 60;
        let tenths = (secs % 60) / 6;
        if tenths > 0 {
            format!("{}.{}m", whole, tenths)
        } else {
            format!("{}m", whole)
        }
    } else {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        if m > 0 {
            format!("{}h{}m", h, m)
        } else {
            format!("{}h", h)
        }
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
