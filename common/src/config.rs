use std::time::Duration;

const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct ProbeConfig {
    /// Upper bound for any external command (dig, getent, ping, nc, ...).
    ///
    /// An expired command counts as a failed lookup, never as an error.
    pub command_timeout: Duration,
    /// Upper bound for a single TCP connection attempt.
    pub connect_timeout: Duration,
    /// Wait time handed to `ping` and `nc` on their own command lines.
    pub ping_timeout: Duration,
    /// Lets the linux provider ask `getent hosts` when dig finds nothing.
    pub getent_fallback: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            ping_timeout: DEFAULT_PING_TIMEOUT,
            getent_fallback: false,
        }
    }
}

impl ProbeConfig {
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_ping_timeout(mut self, timeout: Duration) -> Self {
        self.ping_timeout = timeout;
        self
    }

    pub fn with_getent_fallback(mut self, enabled: bool) -> Self {
        self.getent_fallback = enabled;
        self
    }

    /// Ping wait in whole seconds, rounded up and never below one.
    pub fn ping_timeout_secs(&self) -> u64 {
        let secs = self.ping_timeout.as_millis().div_ceil(1000).max(1);
        u64::try_from(secs).unwrap_or(u64::MAX)
    }

    /// Ping wait in milliseconds, never below one.
    pub fn ping_timeout_millis(&self) -> u128 {
        self.ping_timeout.as_millis().max(1)
    }
}
