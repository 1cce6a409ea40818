//! Timing, ranges and fixed strings used across the dashboard.

use std::time::Duration;

pub const APP_NAME: &str = "Snow VPN";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const TAGLINE: &str = "Your security is our priority";

/// Connection ticker period.
pub const CONNECTION_TICK: Duration = Duration::from_millis(1000);
/// Upper bound (exclusive) of the per-tick download increment, in MB.
pub const DOWNLOAD_STEP_MB: f64 = 0.5;
/// Upper bound (exclusive) of the per-tick upload increment, in MB.
pub const UPLOAD_STEP_MB: f64 = 0.2;

/// Cadence of the snowfall spawner.
pub const SNOW_SPAWN_INTERVAL: Duration = Duration::from_millis(300);
/// How long a flake lives before it is removed.
pub const SNOW_LIFETIME: Duration = Duration::from_millis(8000);
pub const SNOW_FALL_SECS_MIN: f64 = 5.0;
pub const SNOW_FALL_SECS_SPREAD: f64 = 3.0;
pub const SNOW_OPACITY_MIN: f64 = 0.4;
pub const SNOW_OPACITY_SPREAD: f64 = 0.6;
pub const SNOW_SIZE_MIN: f64 = 10.0;
pub const SNOW_SIZE_SPREAD: f64 = 10.0;

pub const DEFAULT_FRAME_MS: u64 = 16;
pub const USAGE_BARS: usize = 12;

pub const TELEGRAM_URL: &str = "https://t.me/vkqeex";
pub const SUPPORT_EMAIL: &str = "support@snowvpn.com";
pub const SUPPORT_HOURS: &str = "24/7";

pub const LOG_FILE_NAME: &str = "snowvpn.log";
