/// Format seconds as a WebVTT timestamp, `H:MM:SS.mmm`.
///
/// Hours are not padded. Milliseconds are truncated from the fractional
/// remainder, never rounded.
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return "0:00:00.000".to_string();
    }

    let mut remainder = seconds;
    let hours = (remainder / 3600.0) as u64;
    remainder -= (hours * 3600) as f64;
    let minutes = (remainder / 60.0) as u64;
    remainder -= (minutes * 60) as f64;
    let secs = remainder as u64;
    let millis = ((remainder - secs as f64) * 1000.0) as u64;

    format!("{}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Convert track time units to seconds.
pub fn units_to_seconds(units: u64, timescale: u32) -> f64 {
    if timescale == 0 {
        return 0.0;
    }
    units as f64 / timescale as f64
}
