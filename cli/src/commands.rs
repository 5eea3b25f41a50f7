pub mod probe;
pub mod resolve;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::Protocol;
use hostprobe_common::platform::PlatformFamily;

#[derive(Parser)]
#[command(name = "hostprobe")]
#[command(about = "Check whether a host resolves and answers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a host and check that it is reachable
    #[command(alias = "p")]
    Probe {
        hostname: String,
        /// Port for tcp and udp checks
        #[arg(short, long)]
        port: Option<u16>,
        /// icmp, tcp or udp
        #[arg(long, default_value = "icmp")]
        protocol: Protocol,
        /// Also print what getent returns (linux only)
        #[arg(long)]
        getent: bool,
    },
    /// Only resolve a host
    #[command(alias = "r")]
    Resolve {
        hostname: String,
        /// Also ask the system resolver through getent (linux only)
        #[arg(long)]
        getent: bool,
    },
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Platform family to probe as, detected when omitted
    #[arg(long, global = true)]
    pub platform: Option<PlatformFamily>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Less output, repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output, repeat for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Ask getent when dig finds nothing (linux only)
    #[arg(long, global = true)]
    pub getent_fallback: bool,

    /// Limit for every external command, in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = 5)]
    pub timeout: u64,

    /// Limit for a tcp connection attempt, in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 3000)]
    pub connect_timeout: u64,

    /// Wait handed to ping and nc, in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 1000)]
    pub ping_timeout: u64,
}

/// How results are rendered.
pub struct Output {
    pub json: bool,
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl GlobalArgs {
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig::default()
            .with_command_timeout(Duration::from_secs(self.timeout))
            .with_connect_timeout(Duration::from_millis(self.connect_timeout))
            .with_ping_timeout(Duration::from_millis(self.ping_timeout))
            .with_getent_fallback(self.getent_fallback)
    }

    pub fn platform(&self) -> PlatformFamily {
        self.platform
            .unwrap_or_else(|| PlatformFamily::from_os_name(std::env::consts::OS))
    }

    pub fn output(&self) -> Output {
        Output {
            json: self.json,
            quiet: self.quiet,
        }
    }
}
