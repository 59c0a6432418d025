// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `codify`: reads a JSON artifact and prints the codifier's fixed-point
//! evaluator program.

#![forbid(missing_docs)]

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use gauss_remez_artifact::Artifact;
use gauss_remez_cli::{ensure_precision, init_logging};

/// Read a JSON artifact and print the textual fixed-point program that
/// evaluates its piecewise rational fit.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the JSON artifact (as written by `build-tree`).
    #[arg(default_value = "result.json")]
    artifact: PathBuf,
}

fn main() {
    init_logging();
    ensure_precision();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.artifact).expect("failed to read artifact");
    let artifact = Artifact::from_json(&text).expect("failed to parse artifact");
    let fits = artifact.to_fits().expect("failed to decode artifact fits");

    log::info!("codifying {} leaves", fits.len());

    let program = gauss_remez_codegen::codify(&fits).expect("codegen failed");
    println!("{program}");
}
