//! Network configuration for the fetch pipeline
//!
//! The only tunables are the two timeouts applied to every request. There is
//! no file or environment based configuration; callers construct a
//! `FetchConfig` in code (the CLI maps its flags onto one).

use std::time::Duration;

/// Default time allowed for establishing a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default time allowed for reading the response
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeouts used by the HTTP fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Upper bound for establishing the TCP/TLS connection
    pub connect_timeout: Duration,
    /// Upper bound for each single read once connected; restarts after every
    /// successful read
    pub read_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Returns a copy with the given connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns a copy with the given read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}
