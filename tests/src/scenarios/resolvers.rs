//! Resolver behaviour seen through the public facade.

use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Duration;

use hostprobe_common::command::CommandOutput;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::ProbeTarget;
use hostprobe_common::platform::PlatformFamily;
use hostprobe_common::testing::ScriptedRunner;
use hostprobe_core::HostProbe;

fn linux_probe(runner: ScriptedRunner, config: ProbeConfig) -> HostProbe {
    let target = ProbeTarget::new("testdomain.com").unwrap();
    HostProbe::with_config(target, PlatformFamily::Linux, Arc::new(runner), config)
}

#[tokio::test]
async fn cname_chains_are_not_surfaced() {
    let runner = ScriptedRunner::new()
        .with_stdout(
            "dig +short AAAA testdomain.com",
            "a.cname.goes.here\nanother.cname.cool\n",
        )
        .with_stdout(
            "dig +short A testdomain.com",
            "a.cname.goes.here\nanother.cname.cool\n12.34.56.78\n",
        );
    let probe = linux_probe(runner, ProbeConfig::default());
    assert_eq!(probe.addresses().await, Some(vec!["12.34.56.78".to_string()]));
}

#[tokio::test]
async fn nothing_resolved_is_absent_not_empty() {
    let runner = ScriptedRunner::new()
        .with_stdout("dig +short AAAA testdomain.com", "\n")
        .with_stdout("dig +short A testdomain.com", "");
    let probe = linux_probe(runner, ProbeConfig::default());
    assert_eq!(probe.addresses().await, None);
    assert!(!probe.resolvable().await);
}

#[tokio::test]
async fn getent_fallback_is_opt_in() {
    let runner = || {
        ScriptedRunner::new().with_stdout(
            "getent hosts testdomain.com",
            "2607:f8b0:4004:805::200e testdomain.com\n",
        )
    };

    let plain = linux_probe(runner(), ProbeConfig::default());
    assert_eq!(plain.addresses().await, None);

    let fallback = linux_probe(runner(), ProbeConfig::default().with_getent_fallback(true));
    assert_eq!(
        fallback.addresses().await,
        Some(vec!["2607:f8b0:4004:805::200e".to_string()])
    );
}

#[tokio::test]
async fn failed_getent_never_resolves() {
    let runner = ScriptedRunner::new().with_output(
        "getent hosts testdomain.com",
        CommandOutput::new("12.34.56.78 testdomain.com\n", 2),
    );
    let probe = linux_probe(runner, ProbeConfig::default().with_getent_fallback(true));
    assert_eq!(probe.addresses().await, None);
}

#[tokio::test]
async fn slow_dig_family_is_dropped_after_command_timeout() {
    let runner = ScriptedRunner::new()
        .with_hang("dig +short AAAA testdomain.com")
        .with_stdout("dig +short A testdomain.com", "12.34.56.78\n");
    let config = ProbeConfig::default().with_command_timeout(Duration::from_millis(100));
    let host = linux_probe(runner, config);

    let addresses = tokio::time::timeout(Duration::from_secs(2), host.addresses()).await;
    assert_eq!(addresses, Ok(Some(vec!["12.34.56.78".to_string()])));
}

#[tokio::test]
async fn getent_fallback_survives_dig_failures() {
    let runner = ScriptedRunner::new()
        .with_spawn_failure("dig +short AAAA testdomain.com", ErrorKind::NotFound)
        .with_timeout("dig +short A testdomain.com")
        .with_stdout("getent hosts testdomain.com", "12.34.56.78 testdomain.com\n");
    let host = linux_probe(runner, ProbeConfig::default().with_getent_fallback(true));
    assert_eq!(host.addresses().await, Some(vec!["12.34.56.78".to_string()]));
}
