// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `build-tree`: runs the Interval Builder over the default configuration
//! and writes the JSON artifact.

#![forbid(missing_docs)]

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use gauss_remez_artifact::Artifact;
use gauss_remez_cli::{default_builder_config, ensure_precision, init_logging, target_fn};

/// Build the default piecewise rational fit of `erf(x / sqrt(2))` and
/// write it to a JSON artifact file.
#[derive(Parser, Debug)]
struct Cli {
    /// Output path for the JSON artifact.
    #[arg(default_value = "result.json")]
    out: PathBuf,

    /// Use the `rayon`-parallel Interval Builder instead of the
    /// sequential one (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,
}

fn main() {
    init_logging();
    ensure_precision();
    let cli = Cli::parse();

    let config = default_builder_config().expect("default builder config is always valid");

    log::info!(
        "building piecewise fit over [{}, {}]",
        config.start,
        config.end
    );

    let fits = run_build(&config, cli.parallel).expect("interval builder failed");

    log::info!("built {} leaves", fits.len());

    let artifact = Artifact::from_fits(&fits);
    let json = artifact.to_json().expect("artifact serializes");
    fs::write(&cli.out, json).expect("failed to write artifact");

    println!("wrote {} leaves to {}", fits.len(), cli.out.display());
}

#[cfg(not(feature = "parallel"))]
fn run_build(
    config: &gauss_remez_core::BuilderConfig,
    parallel: bool,
) -> gauss_remez_error::RemezResult<Vec<gauss_remez_core::IntervalFit>> {
    if parallel {
        log::warn!("--parallel requested but the `parallel` feature is not enabled; running sequentially");
    }
    gauss_remez_core::build(&target_fn, config)
}

#[cfg(feature = "parallel")]
fn run_build(
    config: &gauss_remez_core::BuilderConfig,
    parallel: bool,
) -> gauss_remez_error::RemezResult<Vec<gauss_remez_core::IntervalFit>> {
    if parallel {
        gauss_remez_core::build_parallel(&target_fn, config)
    } else {
        gauss_remez_core::build(&target_fn, config)
    }
}
