//! Canned command output for the platforms the scenarios run against.

use std::sync::Arc;

use hostprobe_common::command::CommandRunner;
use hostprobe_common::testing::ScriptedRunner;
use tokio::net::TcpListener;

pub const EXAMPLE_V6: &str = "2606:2800:220:1:248:1893:25c8:1946";
pub const EXAMPLE_V4: &str = "12.34.56.78";

const MICROSOFT_ANSWER: &str = r#"[
    {
        "Address":  "134.170.185.46",
        "IPAddress":  "134.170.185.46",
        "QueryType":  1,
        "IP4Address":  "134.170.185.46",
        "Name":  "microsoft.com",
        "Type":  1,
        "CharacterSet":  1,
        "Section":  1,
        "DataLength":  4,
        "TTL":  1200
    },
    {
        "Address":  "134.170.188.221",
        "IPAddress":  "134.170.188.221",
        "QueryType":  1,
        "IP4Address":  "134.170.188.221",
        "Name":  "microsoft.com",
        "Type":  1,
        "CharacterSet":  1,
        "Section":  1,
        "DataLength":  4,
        "TTL":  1200
    }
]"#;

/// A unix-like host where `hostname` answers dig for both families and ping.
pub fn unix_host(hostname: &str) -> ScriptedRunner {
    ScriptedRunner::new()
        .with_stdout(&format!("dig +short AAAA {hostname}"), &format!("{EXAMPLE_V6}\n"))
        .with_stdout(&format!("dig +short A {hostname}"), &format!("{EXAMPLE_V4}\n"))
        .with_stdout(
            &format!("getent hosts {hostname}"),
            &format!("{EXAMPLE_V6} {hostname}\n"),
        )
        .with_status(&format!("ping -w 1 -c 1 {hostname}"), 0)
        .with_status(&format!("ping -W 1000 -c 1 {hostname}"), 0)
}

/// A Windows host where `hostname` resolves to two A records and ICMP is
/// filtered.
pub fn windows_host(hostname: &str) -> ScriptedRunner {
    ScriptedRunner::new()
        .with_stdout(
            &format!("Resolve-DnsName -Type A {hostname} | ConvertTo-Json"),
            MICROSOFT_ANSWER,
        )
        .with_status(&format!("ping -n 1 -w 1000 {hostname}"), 1)
}

pub fn windows_addresses() -> Vec<String> {
    vec!["134.170.185.46".to_string(), "134.170.188.221".to_string()]
}

pub fn shared(runner: ScriptedRunner) -> Arc<dyn CommandRunner> {
    Arc::new(runner)
}

/// Binds an ephemeral loopback port; keep the listener alive while probing.
pub async fn open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}
