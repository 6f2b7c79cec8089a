use clap::{Args, Parser, Subcommand};
use std::time::Duration;

pub const DEFAULT_COLLECTOR_URL: &str = "http://collector-service:5002/data";
pub const DEFAULT_INTERVAL_SECS: u64 = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "temp-analyzer", version, about = "Poll a sensor collector and print the average temperature")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub settings: Settings,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Poll forever (default)
    Watch,
    /// Run a single cycle and exit with its status
    Once,
}

#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Collector endpoint serving the JSON array of readings
    #[arg(long, env = "ANALYZER_COLLECTOR_URL", default_value = DEFAULT_COLLECTOR_URL, global = true)]
    pub url: String,

    /// Seconds to sleep between cycles
    #[arg(long, env = "ANALYZER_INTERVAL_SECS", default_value_t = DEFAULT_INTERVAL_SECS,
          value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub interval_secs: u64,

    /// Request deadline in seconds, covering connect and body
    #[arg(long, env = "ANALYZER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub timeout_secs: u64,
}

impl Settings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Startup line, printed before anything else regardless of log level.
    pub fn banner(&self) -> String {
        format!(
            "Starting analyzer: polling {url} every {interval}s (timeout {timeout}s)",
            url = self.url,
            interval = self.interval_secs,
            timeout = self.timeout_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_constants() {
        let cli = Cli::try_parse_from(["temp-analyzer"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.settings.url, "http://collector-service:5002/data");
        assert_eq!(cli.settings.interval(), Duration::from_secs(8));
        assert_eq!(cli.settings.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "temp-analyzer",
            "once",
            "--url",
            "http://localhost:5002/data",
            "--interval-secs",
            "3",
            "--timeout-secs",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Once));
        assert_eq!(cli.settings.url, "http://localhost:5002/data");
        assert_eq!(cli.settings.interval(), Duration::from_secs(3));
        assert_eq!(cli.settings.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn banner_names_target_and_timing() {
        let cli = Cli::try_parse_from(["temp-analyzer", "--url", "http://sensors.local/data"]).unwrap();
        assert_eq!(
            cli.settings.banner(),
            "Starting analyzer: polling http://sensors.local/data every 8s (timeout 10s)"
        );
    }

    #[test]
    fn zero_durations_are_rejected() {
        assert!(Cli::try_parse_from(["temp-analyzer", "--interval-secs", "0"]).is_err());
        assert!(Cli::try_parse_from(["temp-analyzer", "--timeout-secs", "0"]).is_err());
    }
}
