#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! Diagnostic CLI for the HFP default-version resolver.
//!
//! Meant for device bring-up: `resolve` reports the version a fresh process
//! would assume (including any platform property override), `show` decodes a
//! raw 16-bit encoding into `major.minor` form.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use hfp_sysprop::parse_u16;
use hfp_version::{HfpVersion, VERSION_PROPERTY, default_hfp_version};

#[derive(Parser)]
#[command(name = "hfp-cli", version, about = "Inspect the HFP default-version resolution")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the default version this process would assume.
    Resolve {
        /// Emit the result as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Decode a raw 16-bit version encoding (decimal or 0x-prefixed hex).
    Show {
        /// Encoding to decode, e.g. `263` or `0x0107`.
        raw: String,
    },
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve { json } => {
            tracing::debug!(property = VERSION_PROPERTY, "resolving default version");
            let version = default_hfp_version();
            if json {
                let text = serde_json::to_string_pretty(&json!({
                    "property": VERSION_PROPERTY,
                    "version": version.to_string(),
                    "raw": version.raw(),
                    "major": version.major(),
                    "minor": version.minor(),
                }))
                .context("failed to format JSON")?;
                println!("{text}");
            } else {
                println!("{version} (0x{:04x})", version.raw());
            }
            Ok(())
        }
        Command::Show { raw } => {
            let parsed = parse_u16("raw", &raw)
                .with_context(|| format!("'{raw}' is not a 16-bit version encoding"))?;
            let version = HfpVersion::from_raw(parsed);
            println!("{version} (0x{:04x})", version.raw());
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
