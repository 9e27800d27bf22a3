#![warn(missing_docs)]

//! Entry point for the `tabwin` binary.

mod cli;
mod error;
mod geometry;
mod simulate;

use std::{io, process};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    let env_filter = logging::env_filter_from_spec(&log.spec());
    // stdout carries the JSON results
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    let out = match command {
        Commands::Resolve(args) => geometry::resolve(&args)?,
        Commands::Clone(args) => geometry::clone(&args)?,
        Commands::Options(args) => geometry::options(&args)?,
        Commands::Simulate(args) => simulate::run(&args)?,
    };
    println!("{out}");
    Ok(())
}
