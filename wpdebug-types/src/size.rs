const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units, e.g. 1536 -> "1.5 KB".
///
/// Values below 1 KB are shown as whole bytes. Larger values use the biggest
/// unit that fits, rounded to one decimal place, with a trailing ".0" dropped.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut unit = 0;
    let mut magnitude = 1u64;
    while unit + 1 < UNITS.len() && bytes >= magnitude * 1024 {
        magnitude *= 1024;
        unit += 1;
    }

    let mut value = bytes as f64 / magnitude as f64;
    // 1023.96 KB would print as "1024 KB"; show it as "1 MB" instead
    if (value * 10.0).round() >= 10240.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.1}", value);
    let rounded = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", rounded, UNITS[unit])
}
