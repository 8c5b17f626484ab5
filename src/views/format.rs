//! Human-readable sizes.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// `0 Bytes`, `512 Bytes`, `1.5 KB`, `10 MB`; two decimals at most.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}
