use std::net::{Ipv4Addr, Ipv6Addr};

use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::AddressList;
use tracing::debug;

use super::run;

/// Resolves through `dig +short`, one query per address family.
///
/// `dig +short` prints the CNAME chain it followed before the final
/// record, so only the last line of each answer is taken as the address,
/// and only when it is a literal of the queried family.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigResolver;

impl DigResolver {
    pub async fn resolve(
        &self,
        runner: &dyn CommandRunner,
        config: &ProbeConfig,
        hostname: &str,
    ) -> Option<AddressList> {
        let v6_command: String = format!("dig +short AAAA {hostname}");
        let v4_command: String = format!("dig +short A {hostname}");

        let (v6, v4) = tokio::join!(
            final_record(runner, config, &v6_command, Family::V6),
            final_record(runner, config, &v4_command, Family::V4),
        );

        merge_families(v6, v4)
    }
}

#[derive(Clone, Copy, Debug)]
enum Family {
    V6,
    V4,
}

impl Family {
    fn accepts(self, literal: &str) -> bool {
        match self {
            Family::V6 => literal.parse::<Ipv6Addr>().is_ok(),
            Family::V4 => literal.parse::<Ipv4Addr>().is_ok(),
        }
    }
}

async fn final_record(
    runner: &dyn CommandRunner,
    config: &ProbeConfig,
    command_line: &str,
    family: Family,
) -> Option<String> {
    let output = run(runner, config, command_line).await?;
    let line = last_record_line(&output.stdout)?;
    if family.accepts(&line) {
        Some(line)
    } else {
        // The chain ended on an alias without an address record.
        debug!(command = command_line, line = %line, "answer has no {family:?} record");
        None
    }
}

/// Last non-empty line of a `dig +short` answer.
///
/// Lines starting with `;` are dig diagnostics (e.g. `;; connection timed
/// out`) and never count as records.
fn last_record_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .last()
        .map(str::to_string)
}

/// IPv6 always precedes IPv4, whichever query finished first.
fn merge_families(v6: Option<String>, v4: Option<String>) -> Option<AddressList> {
    let merged: AddressList = v6.into_iter().chain(v4).collect();
    (!merged.is_empty()).then_some(merged)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
