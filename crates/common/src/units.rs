//! Byte size conversions.

/// Bytes per megabyte. Platform limits are expressed in binary megabytes.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Convert a byte count to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Human-readable size, e.g. `6.1 KB` or `600.0 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
