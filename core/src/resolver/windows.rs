use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::AddressList;
use serde::Deserialize;
use tracing::debug;

use super::run;

/// Resolves through PowerShell's `Resolve-DnsName`, rendered as JSON.
///
/// Only A records are asked for. CNAME entries in the answer carry no
/// `IPAddress` and drop out while parsing.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsResolver;

#[derive(Debug, Deserialize)]
struct DnsRecord {
    #[serde(rename = "IPAddress", default)]
    ip_address: Option<String>,
}

/// `ConvertTo-Json` emits a bare object for a single record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DnsAnswer {
    Many(Vec<DnsRecord>),
    One(DnsRecord),
}

impl WindowsResolver {
    pub async fn resolve(
        &self,
        runner: &dyn CommandRunner,
        config: &ProbeConfig,
        hostname: &str,
    ) -> Option<AddressList> {
        let command_line: String = format!("Resolve-DnsName -Type A {hostname} | ConvertTo-Json");
        let output = run(runner, config, &command_line).await?;

        if !output.success() {
            return None;
        }
        parse_answer(&output.stdout)
    }
}

fn parse_answer(stdout: &str) -> Option<AddressList> {
    let answer: DnsAnswer = match serde_json::from_str(stdout.trim_start_matches('\u{feff}').trim()) {
        Ok(answer) => answer,
        Err(e) => {
            debug!("unreadable Resolve-DnsName output: {e}");
            return None;
        }
    };

    let records: Vec<DnsRecord> = match answer {
        DnsAnswer::Many(records) => records,
        DnsAnswer::One(record) => vec![record],
    };

    let addresses: AddressList = records
        .into_iter()
        .filter_map(|record| record.ip_address)
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .collect();

    (!addresses.is_empty()).then_some(addresses)
}
