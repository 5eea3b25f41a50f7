use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::AddressList;
use tracing::debug;

use super::run;

/// Resolves through the system resolver (`getent hosts`), so
/// `/etc/hosts`, nscd and NSS modules all take part.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetentResolver;

impl GetentResolver {
    pub async fn resolve(
        &self,
        runner: &dyn CommandRunner,
        config: &ProbeConfig,
        hostname: &str,
    ) -> Option<AddressList> {
        let command_line: String = format!("getent hosts {hostname}");
        let output = run(runner, config, &command_line).await?;

        // A failed lookup is final even if something was printed.
        if !output.success() {
            debug!(command = %command_line, "getent reported no entry");
            return None;
        }

        let addresses: AddressList = output
            .stdout
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect();

        (!addresses.is_empty()).then_some(addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostprobe_common::command::CommandOutput;
    use hostprobe_common::testing::ScriptedRunner;

    const COMMAND: &str = "getent hosts testdomain.com";

    #[tokio::test]
    async fn returns_address_field_only() {
        let runner = ScriptedRunner::new()
            .with_stdout(COMMAND, "2607:f8b0:4004:805::200e testdomain.com\n");
        assert_eq!(
            GetentResolver.resolve(&runner, &ProbeConfig::default(), "testdomain.com").await,
            Some(vec!["2607:f8b0:4004:805::200e".to_string()])
        );
    }

    #[tokio::test]
    async fn keeps_line_order_and_drops_aliases() {
        let stdout = "2607:f8b0:4004:805::200e testdomain.com www.testdomain.com\n\
                      \n\
                      12.34.56.78\ttestdomain.com\n";
        let runner = ScriptedRunner::new().with_stdout(COMMAND, stdout);
        assert_eq!(
            GetentResolver.resolve(&runner, &ProbeConfig::default(), "testdomain.com").await,
            Some(vec![
                "2607:f8b0:4004:805::200e".to_string(),
                "12.34.56.78".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn returns_none_on_failure_status() {
        let runner = ScriptedRunner::new().with_status(COMMAND, 1);
        assert_eq!(GetentResolver.resolve(&runner, &ProbeConfig::default(), "testdomain.com").await, None);
    }

    #[tokio::test]
    async fn failure_status_wins_over_stdout() {
        let runner = ScriptedRunner::new().with_output(
            COMMAND,
            CommandOutput::new("12.34.56.78 testdomain.com\n", 2),
        );
        assert_eq!(GetentResolver.resolve(&runner, &ProbeConfig::default(), "testdomain.com").await, None);
    }

    #[tokio::test]
    async fn returns_none_on_blank_success() {
        let runner = ScriptedRunner::new().with_stdout(COMMAND, "  \n");
        assert_eq!(GetentResolver.resolve(&runner, &ProbeConfig::default(), "testdomain.com").await, None);
    }

    #[tokio::test]
    async fn returns_none_when_runner_fails() {
        let config = ProbeConfig::default();

        let missing = ScriptedRunner::new().with_spawn_failure(COMMAND, std::io::ErrorKind::NotFound);
        assert_eq!(GetentResolver.resolve(&missing, &config, "testdomain.com").await, None);

        let timed_out = ScriptedRunner::new().with_timeout(COMMAND);
        assert_eq!(GetentResolver.resolve(&timed_out, &config, "testdomain.com").await, None);
    }
}
