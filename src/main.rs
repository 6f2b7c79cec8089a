use anyhow::Context;
use clap::Parser;
use log::error;
use std::io::Write;
use std::process::ExitCode;

use temp_analyzer::config::{Cli, Command, Settings};
use temp_analyzer::readings::Collector;
use temp_analyzer::scheduler::{self, Job};

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
}

fn build_job(settings: &Settings) -> anyhow::Result<Job> {
    let collector = Collector::new(&settings.url, settings.timeout())
        .with_context(|| format!("could not build HTTP client for {}", settings.url))?;
    Ok(Job::new("analyzer", settings.interval(), move || collector.poll()))
}

fn entry(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = cli.settings;
    println!("{}", settings.banner());
    let mut job = build_job(&settings)?;
    scheduler::quiet_panics();

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => job.run(),
        Command::Once => {
            // Job::tick already logged the failure.
            let code = match job.tick() {
                Ok(_) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
            // The logger writes to stdout too, make sure the report is out before exiting.
            let _ = std::io::stdout().flush();
            Ok(code)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger();

    entry(cli).unwrap_or_else(|err| {
        error!("{err:#}");
        ExitCode::FAILURE
    })
}
