//! Size formatting utilities for the file inspector.
//!
//! This module provides helper functions for rendering byte counts in a
//! human-readable way. Two representations exist: an abbreviated form used
//! for label text, and a full thousands-separated form used in detail popups.

/// Unit suffixes for the abbreviated size representation, in 1024-steps.
const SIZE_UNITS: [&str; 4] = ["kB", "MB", "GB", "TB"];

/// Formats a byte count as an abbreviated human-readable size string.
///
/// Values below 1 kB are shown as plain bytes with no decimals; larger
/// values are divided down in 1024-steps and shown with one decimal digit.
/// Negative values are treated as "unset" and yield an empty string.
///
/// # Examples
/// ```
/// use fsinspect::formatting::format_size;
///
/// assert_eq!(format_size(0), "0 bytes");
/// assert_eq!(format_size(512), "512 bytes");
/// assert_eq!(format_size(2048), "2.0 kB");
/// assert_eq!(format_size(3_355_443), "3.2 MB");
/// assert_eq!(format_size(-1), "");
/// ```
pub fn format_size(bytes: i64) -> String {
    if bytes < 0 {
        return String::new();
    }
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, SIZE_UNITS[unit])
}

/// Formats a byte count as a full, unabbreviated size string with
/// thousands separators, e.g. `"1,234,567 Bytes"`.
///
/// This is the representation used in the size label's detail popup.
/// Negative values yield an empty string.
///
/// # Examples
/// ```
/// use fsinspect::formatting::format_byte_size;
///
/// assert_eq!(format_byte_size(1), "1 Byte");
/// assert_eq!(format_byte_size(1_234_567), "1,234,567 Bytes");
/// assert_eq!(format_byte_size(-1), "");
/// ```
pub fn format_byte_size(bytes: i64) -> String {
    if bytes < 0 {
        return String::new();
    }
    let unit = if bytes == 1 { "Byte" } else { "Bytes" };
    format!("{} {}", insert_thousands_separators(bytes), unit)
}

/// Inserts thousands separators into an integer for readability.
///
/// # Examples
/// ```
/// use fsinspect::formatting::insert_thousands_separators;
///
/// assert_eq!(insert_thousands_separators(1000), "1,000");
/// assert_eq!(insert_thousands_separators(1234567), "1,234,567");
/// ```
pub fn insert_thousands_separators(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        result.push('-');
    }
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
