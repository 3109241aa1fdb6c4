//! # Beam CLI
//!
//! Command line front end for `beam_core`. Reads the same JSON parameter
//! object the tool surface accepts and prints either the text summary or the
//! full JSON result.
//!
//! ```text
//! beam_cli analyze beam.json
//! cat beam.json | beam_cli analyze - --json --stations 200
//! beam_cli schema
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to see solver stages.

mod cli;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use beam_core::errors::{CalcError, CalcResult};
use beam_core::tool;
use clap::Parser;
use log::{debug, error};
use serde_json::Value;

use cli::{Cli, Commands};

fn read_params(input: &Path) -> CalcResult<Value> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::invalid_input("input", "-", e.to_string()))?;
        buf
    } else {
        fs::read_to_string(input).map_err(|e| {
            CalcError::invalid_input("input", input.display().to_string(), e.to_string())
        })?
    };
    Ok(serde_json::from_str(&text)?)
}

fn run_analyze(input: &Path, json: bool, stations: Option<usize>) -> CalcResult<()> {
    let mut params = read_params(input)?;
    if let (Some(n), Some(obj)) = (stations, params.as_object_mut()) {
        debug!("station count overridden to {}", n);
        obj.insert("station_count".to_string(), Value::from(n));
    }

    let response = tool::execute(&params)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&response.data)?);
    } else {
        print!("{}", response.summary);
    }
    Ok(())
}

fn report_error(e: &CalcError) {
    error!("{}", e.error_code());
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Analyze { input, json, stations } => run_analyze(&input, json, stations),
        Commands::Schema => serde_json::to_string_pretty(tool::parameter_schema())
            .map(|schema| println!("{}", schema))
            .map_err(CalcError::from),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
