use std::sync::Arc;
use std::time::Instant;

use colored::*;
use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::{AddressList, ProbeResult, ProbeTarget};
use hostprobe_common::platform::PlatformFamily;
use hostprobe_core::HostProbe;
use tracing::warn;

use crate::commands::Output;
use crate::commands::resolve::{getent_lookup, print_addresses};
use crate::terminal::print::{self, Detail};
use crate::terminal::{colors, format, spinner};

pub async fn probe(
    target: ProbeTarget,
    platform: PlatformFamily,
    runner: Arc<dyn CommandRunner>,
    cfg: ProbeConfig,
    with_getent: bool,
    out: &Output,
) -> anyhow::Result<()> {
    let probe = HostProbe::with_config(target, platform, runner, cfg);
    if probe.provider().is_none() {
        warn!("{platform} is not supported, nothing will be probed");
    }

    let show_spinner: bool = !out.json && out.quiet == 0;
    if show_spinner {
        spinner::start(format!("Probing {}...", probe.target().hostname().bold()));
    }
    let start_time: Instant = Instant::now();
    let result: ProbeResult = probe.probe().await;
    let getent: Option<Option<AddressList>> = if with_getent {
        getent_lookup(&probe, platform).await
    } else {
        None
    };
    if show_spinner {
        spinner::stop();
    }

    if out.json {
        let mut doc = serde_json::to_value(&result)?;
        if let Some(getent) = &getent {
            doc["getent"] = serde_json::json!(getent);
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print::header(&probe.target().to_string(), out.quiet);
    print_result(&result, platform, out);
    if let Some(getent) = getent {
        print_addresses(1, "getent", getent.as_deref());
    }
    if out.quiet == 0 {
        print::fat_separator();
        let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
            .bold()
            .color(colors::ACCENT);
        print::print(&format!("Probe finished in {elapsed}"));
    }
    Ok(())
}

fn print_result(result: &ProbeResult, platform: PlatformFamily, out: &Output) {
    if out.quiet > 1 {
        let summary: String = format!(
            "resolvable={} reachable={}",
            result.resolvable, result.reachable
        );
        print::print(&summary);
        return;
    }

    let mut details: Vec<Detail> = vec![
        ("Platform".to_string(), platform.to_string().normal()),
        format::bool_to_detail("Resolvable", result.resolvable),
        format::bool_to_detail("Reachable", result.reachable),
    ];
    if let Some(addresses) = &result.addresses {
        details.extend(format::addresses_to_detail(addresses));
    }
    print::as_tree_one_level(&details);
}
