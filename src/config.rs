//! Command-line configuration

use crate::consts::{DEFAULT_FRAME_MS, LOG_FILE_NAME};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Snow VPN terminal dashboard", long_about = None)]
/// Command-line arguments
pub struct Args {
    /// Seed for the simulated bandwidth and snowfall. Random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Turn off the snowfall effect.
    #[arg(long)]
    pub no_snow: bool,

    /// Input poll interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_MS)]
    pub frame_ms: u64,

    /// Where to write logs. Defaults to the system temp directory.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose logging; `RUST_LOG` is honored when set.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub seed: Option<u64>,
    pub snow: bool,
    pub frame: Duration,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            snow: !args.no_snow,
            frame: Duration::from_millis(args.frame_ms.max(1)),
            log_file: args
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME)),
            debug: args.debug,
        }
    }
}
