mod commands;
mod terminal;

use std::sync::Arc;

use commands::{CommandLine, Commands, probe, resolve};
use hostprobe_common::command::CommandRunner;
use hostprobe_common::network::ProbeTarget;
use hostprobe_core::SystemCommandRunner;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.global.verbose);

    let cfg = commands.global.probe_config();
    let platform = commands.global.platform();
    let out = commands.global.output();
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::new(cfg.command_timeout));

    if !out.json {
        print::banner(commands.global.no_banner, out.quiet);
    }

    match commands.command {
        Commands::Probe {
            hostname,
            port,
            protocol,
            getent,
        } => {
            let mut target = ProbeTarget::new(hostname)?.with_protocol(protocol);
            if let Some(port) = port {
                target = target.with_port(port);
            }
            probe::probe(target, platform, runner, cfg, getent, &out).await
        }
        Commands::Resolve { hostname, getent } => {
            let target = ProbeTarget::new(hostname)?;
            resolve::resolve(target, platform, runner, cfg, getent, &out).await
        }
    }
}
