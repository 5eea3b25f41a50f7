use std::sync::Arc;

use colored::*;
use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::{AddressList, ProbeTarget};
use hostprobe_common::platform::PlatformFamily;
use hostprobe_core::HostProbe;
use serde_json::json;
use tracing::warn;

use crate::commands::Output;
use crate::terminal::print::{self, Detail};
use crate::terminal::{colors, format};

pub async fn resolve(
    target: ProbeTarget,
    platform: PlatformFamily,
    runner: Arc<dyn CommandRunner>,
    cfg: ProbeConfig,
    with_getent: bool,
    out: &Output,
) -> anyhow::Result<()> {
    let probe = HostProbe::with_config(target, platform, runner, cfg);
    let addresses: Option<AddressList> = probe.addresses().await;

    let getent: Option<Option<AddressList>> = if with_getent {
        getent_lookup(&probe, platform).await
    } else {
        None
    };

    if out.json {
        let mut doc = json!({ "addresses": addresses });
        if let Some(getent) = &getent {
            doc["getent"] = json!(getent);
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print::header(probe.target().hostname(), out.quiet);
    print_addresses(0, "resolver", addresses.as_deref());
    if let Some(getent) = getent {
        print_addresses(1, "getent", getent.as_deref());
    }
    Ok(())
}

/// Asks getent directly. The outer `None` means the platform has no getent.
pub(crate) async fn getent_lookup(
    host: &HostProbe,
    platform: PlatformFamily,
) -> Option<Option<AddressList>> {
    match host.provider().and_then(|provider| provider.as_linux()) {
        Some(linux) => Some(linux.resolve_with_getent(host.target().hostname()).await),
        None => {
            warn!("getent is only available on linux, not on {platform}");
            None
        }
    }
}

pub(crate) fn print_addresses(idx: usize, source: &str, addresses: Option<&[String]>) {
    print::tree_head(idx, source);
    let details: Vec<Detail> = match addresses {
        Some(addresses) => format::addresses_to_detail(addresses),
        None => vec![("Result".to_string(), "not resolvable".color(colors::NEGATIVE))],
    };
    print::as_tree_one_level(&details);
}
