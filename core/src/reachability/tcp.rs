use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Full TCP handshake against one port.
///
/// Unlike a discovery probe, a refused connection means unreachable here:
/// the question is whether the service answers, not whether the host is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TcpConnectStrategy {
    port: u16,
}

impl TcpConnectStrategy {
    pub const fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Connects by hostname. Every resolved address is tried in turn,
    /// all within one `connect_timeout`.
    pub async fn reachable(&self, hostname: &str, connect_timeout: Duration) -> bool {
        match timeout(connect_timeout, TcpStream::connect((hostname, self.port))).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                debug!("{hostname}:{}: connect failed: {e}", self.port);
                false
            }
            Err(_elapsed) => {
                debug!("{hostname}:{}: connect timed out after {connect_timeout:?}", self.port);
                false
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
