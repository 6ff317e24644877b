use clap::Parser;
use oop_showcase::{CliArgs, DemoConfig, init_logging, run_demo};

fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    let config = DemoConfig::from_args(cli)?;
    init_logging(&config.logging)?;

    tracing::info!("starting OOP construct walkthrough");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;

    tracing::info!("walkthrough complete");
    Ok(())
}
