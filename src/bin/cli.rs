// src/bin/cli.rs
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::eyre;

use dict_scrape::{ cli, log };

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(&args.log_level);
    cli::run(args).map_err(|e| eyre!("{e}"))
}
