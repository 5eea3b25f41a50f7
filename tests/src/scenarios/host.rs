//! End-to-end behaviour of the probe facade per platform family.

use hostprobe_common::network::{ProbeResult, ProbeTarget, Protocol};
use hostprobe_common::platform::PlatformFamily;
use hostprobe_common::testing::ScriptedRunner;
use hostprobe_core::HostProbe;

use crate::util::{self, EXAMPLE_V4, EXAMPLE_V6};

fn example_addresses() -> Option<Vec<String>> {
    Some(vec![EXAMPLE_V6.to_string(), EXAMPLE_V4.to_string()])
}

async fn icmp_probe(platform: PlatformFamily, runner: ScriptedRunner, hostname: &str) -> ProbeResult {
    let target = ProbeTarget::new(hostname).unwrap();
    HostProbe::new(target, platform, util::shared(runner)).probe().await
}

/// Probes 127.0.0.1 over tcp against a port that is actually listening.
async fn tcp_probe(platform: PlatformFamily, runner: ScriptedRunner, port: u16) -> ProbeResult {
    let target = ProbeTarget::new("127.0.0.1")
        .unwrap()
        .with_port(port)
        .with_protocol(Protocol::Tcp);
    HostProbe::new(target, platform, util::shared(runner)).probe().await
}

/*************************************************************
                       ICMP scenarios
**************************************************************/

#[tokio::test]
async fn icmp_on_ubuntu_with_dig() {
    let result = icmp_probe(PlatformFamily::Linux, util::unix_host("example.com"), "example.com").await;
    assert!(result.resolvable);
    assert!(result.reachable);
    assert_eq!(result.addresses, example_addresses());
}

#[tokio::test]
async fn icmp_on_generic_unix() {
    let result = icmp_probe(PlatformFamily::Unix, util::unix_host("example.com"), "example.com").await;
    assert!(result.resolvable);
    assert!(result.reachable);
    assert_eq!(result.addresses, example_addresses());
}

#[tokio::test]
async fn icmp_on_darwin() {
    let result = icmp_probe(PlatformFamily::Darwin, util::unix_host("example.com"), "example.com").await;
    assert!(result.resolvable);
    assert!(result.reachable);
    assert_eq!(result.addresses, example_addresses());
}

#[tokio::test]
async fn icmp_on_windows_is_filtered() {
    let result = icmp_probe(
        PlatformFamily::Windows,
        util::windows_host("microsoft.com"),
        "microsoft.com",
    )
    .await;
    assert!(result.resolvable);
    assert!(!result.reachable);
    assert_eq!(result.addresses, Some(util::windows_addresses()));
}

#[tokio::test]
async fn icmp_on_unsupported_os() {
    let result = icmp_probe(
        PlatformFamily::Unsupported,
        util::unix_host("example.com"),
        "example.com",
    )
    .await;
    assert!(!result.resolvable);
    assert!(!result.reachable);
    assert!(result.addresses.is_none());
}

/*************************************************************
                        TCP scenarios
**************************************************************/

#[tokio::test]
async fn tcp_on_ubuntu() {
    let (_listener, port) = util::open_port().await;
    let result = tcp_probe(PlatformFamily::Linux, util::unix_host("127.0.0.1"), port).await;
    assert!(result.resolvable);
    assert!(result.reachable);
    assert_eq!(result.addresses, example_addresses());
}

#[tokio::test]
async fn tcp_on_darwin() {
    let (_listener, port) = util::open_port().await;
    let result = tcp_probe(PlatformFamily::Darwin, util::unix_host("127.0.0.1"), port).await;
    assert!(result.resolvable);
    assert!(result.reachable);
    assert_eq!(result.addresses, example_addresses());
}

#[tokio::test]
async fn tcp_on_windows_ignores_ping_outcome() {
    let (_listener, port) = util::open_port().await;
    let result = tcp_probe(PlatformFamily::Windows, util::windows_host("127.0.0.1"), port).await;
    assert!(result.resolvable);
    assert!(result.reachable);
    assert_eq!(result.addresses, Some(util::windows_addresses()));
}

#[tokio::test]
async fn tcp_on_unsupported_os() {
    let (_listener, port) = util::open_port().await;
    let result = tcp_probe(PlatformFamily::Unsupported, util::unix_host("127.0.0.1"), port).await;
    assert_eq!(result, ProbeResult::unavailable());
}

#[tokio::test]
async fn tcp_on_closed_port_is_unreachable() {
    let (listener, port) = util::open_port().await;
    drop(listener);
    let result = tcp_probe(PlatformFamily::Linux, util::unix_host("127.0.0.1"), port).await;
    assert!(result.resolvable);
    assert!(!result.reachable);
}

/*************************************************************
                     Facade invariants
**************************************************************/

#[tokio::test]
async fn same_resolution_differs_only_by_protocol() {
    let (_listener, port) = util::open_port().await;
    let icmp = icmp_probe(PlatformFamily::Windows, util::windows_host("127.0.0.1"), "127.0.0.1").await;
    let tcp = tcp_probe(PlatformFamily::Windows, util::windows_host("127.0.0.1"), port).await;

    assert_eq!(icmp.addresses, tcp.addresses);
    assert!(!icmp.reachable);
    assert!(tcp.reachable);
}

#[tokio::test]
async fn resolvable_matches_addresses_for_every_family() {
    for platform in [
        PlatformFamily::Unix,
        PlatformFamily::Linux,
        PlatformFamily::Darwin,
        PlatformFamily::Windows,
        PlatformFamily::Unsupported,
    ] {
        for runner in [ScriptedRunner::new(), util::unix_host("example.com")] {
            let result = icmp_probe(platform, runner, "example.com").await;
            assert_eq!(
                result.resolvable,
                result.addresses.as_ref().is_some_and(|list| !list.is_empty()),
                "inconsistent result on {platform}"
            );
        }
    }
}

#[tokio::test]
async fn repeated_probes_agree() {
    let target = ProbeTarget::new("example.com").unwrap();
    let probe = HostProbe::new(
        target,
        PlatformFamily::Linux,
        util::shared(util::unix_host("example.com")),
    );

    let first = probe.probe().await;
    let second = probe.probe().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn linux_getent_is_separate_from_resolution() {
    let target = ProbeTarget::new("example.com").unwrap();
    let probe = HostProbe::new(
        target,
        PlatformFamily::Linux,
        util::shared(util::unix_host("example.com")),
    );

    let linux = probe.provider().and_then(|p| p.as_linux()).unwrap();
    assert_eq!(
        linux.resolve_with_getent("example.com").await,
        Some(vec![EXAMPLE_V6.to_string()])
    );
    assert_eq!(linux.resolve_with_dig("example.com").await, example_addresses());
    assert_eq!(probe.addresses().await, example_addresses());
}
