use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "jsonnorm-cli",
    about = "Normalize JSON into a minified canonical form",
    version
)]
struct Args {
    /// Keep single-element arrays instead of replacing them with their element
    #[arg(long, default_value_t = false)]
    no_collapse: bool,

    /// On invalid JSON, print the input unchanged instead of failing
    #[arg(long, default_value_t = false)]
    passthrough: bool,

    /// Compare INPUT with this file and report whether they are equivalent
    /// (exit 0 if equivalent, 1 if different, 2 on error)
    #[arg(long, value_name = "FILE", conflicts_with = "passthrough")]
    compare: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

/// Exit status for invalid input or I/O failure, kept apart from "different".
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let buf = match &args.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let options = jsonnorm::Options {
        collapse_single_element_arrays: !args.no_collapse,
    };

    if let Some(other) = &args.compare {
        let other = read_file(other)?;
        return if jsonnorm::equivalent_with(&buf, &other, &options)? {
            println!("equivalent");
            Ok(ExitCode::SUCCESS)
        } else {
            println!("different");
            Ok(ExitCode::FAILURE)
        };
    }

    match jsonnorm::normalize_json_string_with(Some(&buf), &options) {
        Ok(out) => println!("{out}"),
        Err(e) if args.passthrough => {
            warn!("{e}; passing input through unchanged");
            print!("{}", e.into_input().unwrap_or(buf));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(ExitCode::SUCCESS)
}

fn read_file(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(buf)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
