//! Command-line replay driver.
//!
//! Feeds a recorded action script through a filter store and prints the
//! result as JSON. Useful for reproducing a reported filter state from the
//! sequence of taps that produced it.
//!
//! # Usage
//!
//! ```text
//! artwork-filters [--config FILE] [--emit final|states|params|display] [SCRIPT]
//! ```
//!
//! `SCRIPT` defaults to stdin (`-`). The config file may seed initial
//! filters and enable trace export; see [`artwork_filters::Config`].

#![allow(clippy::multiple_crate_versions)]

use artwork_filters::{initialize, observability, replay, Config, FilterError};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "artwork-filters", version, about = "Replay artwork filter actions and print the resulting state")]
struct Cli {
    /// Action script, one JSON action per line. `-` reads stdin.
    #[arg(default_value = "-")]
    script: String,

    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to print after replaying.
    #[arg(short, long, value_enum, default_value_t = Emit::Final)]
    emit: Emit,

    /// Overrides the config's trace level.
    #[arg(long)]
    trace_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The final state.
    Final,
    /// Every intermediate state, one JSON document per line.
    States,
    /// Query parameters for the final applied filters.
    Params,
    /// Options the selection UI would show as checked.
    Display,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("artwork-filters: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), FilterError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.trace_level.is_some() {
        config.trace_level.clone_from(&cli.trace_level);
    }
    observability::init_tracing(&config);

    let _span = tracing::debug_span!("replay", script = %cli.script).entered();

    let mut store = initialize(&config);
    let states = if cli.script == "-" {
        replay::run_script(&mut store, io::stdin().lock())?
    } else {
        replay::run_script(&mut store, BufReader::new(File::open(&cli.script)?))?
    };
    tracing::debug!(dispatched = store.dispatched(), "replay complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.emit {
        Emit::Final => print_json(&mut out, store.state())?,
        Emit::States => {
            for state in &states {
                print_json(&mut out, state)?;
            }
        }
        Emit::Params => print_json(&mut out, &store.request_params())?,
        Emit::Display => print_json(&mut out, &store.selected_options_display())?,
    }
    Ok(())
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), FilterError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
