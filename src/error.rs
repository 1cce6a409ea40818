//! Error types for the dashboard

use std::io;
use thiserror::Error;

/// Validation failures raised by connection transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// Tried to connect before picking a server.
    #[error("Select a server first")]
    NoServerSelected,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The platform opener could not launch the link.
    #[error("failed to open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),
}
