//! Display formatting helpers

/// Format elapsed seconds as `HH:MM:SS`. Hours are not capped.
pub fn format_elapsed(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

pub fn format_megabytes(mb: f64) -> String {
    format!("{:.2} MB", mb)
}
