use clap::Parser;
use oop_basics::{CliArgs, DemoConfig, LoggingConfig, init_logging, run_demo};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = DemoConfig::from_args(cli)?;

    // Fail before printing anything.
    config.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;
    out.flush()?;

    Ok(())
}
