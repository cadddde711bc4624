//! fixturegen CLI - writes the five synthetic JSON fixture files

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use fixturegen_core::write_fixture;

/// Number of fixture files written per run (`f0.json` .. `f4.json`).
const FILE_COUNT: u32 = 5;

/// Generate synthetic JSON test fixtures in the current directory.
///
/// Counts, field sets, and output names are fixed; the only CLI surface
/// is --help and --version.
#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(about = "Generate synthetic JSON test fixtures (f0.json..f4.json)")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Deliberately unseeded: separate runs produce different fixtures.
    let mut rng = rand::thread_rng();
    let dir = Path::new(".");

    for index in 0..FILE_COUNT {
        let summary = write_fixture(dir, index, &mut rng)
            .with_context(|| format!("writing fixture {index}"))?;
        eprintln!(
            "Wrote {} ({} rows, {} bytes)",
            summary.path.display(),
            summary.rows,
            summary.bytes
        );
    }

    Ok(())
}
