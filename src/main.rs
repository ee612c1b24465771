mod cli;
mod config;
mod convert;
mod date_cmd;
mod festival_cmd;
mod logging;
mod output;
mod remind_cmd;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(
        cli.config.as_deref(),
        Path::new(config::DEFAULT_CONFIG_FILE),
    )?;
    let format = convert::resolve_output_format(&config.output, cli.format.as_deref())?;

    let rendered = match cli.command {
        Command::Lunar(args) => date_cmd::lunar(&args, format),
        Command::Solar(args) => date_cmd::solar(&args, format),
        Command::Year(args) => date_cmd::year(&args, format),
        Command::Festivals(args) => festival_cmd::festivals(&args, format),
        Command::Upcoming(args) => festival_cmd::upcoming(&args, &config, format),
        Command::Next(args) => remind_cmd::next(&args, &config, format),
    }?;
    println!("{rendered}");
    Ok(())
}
