// src/bin/cli.rs
use clap::Parser;
use disruption_board::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(args.log_level());
    cli::run(&args)?;
    Ok(())
}
