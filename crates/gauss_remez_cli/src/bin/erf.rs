// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `erf`: WAD-scaled integer error function.

#![forbid(missing_docs)]

use clap::Parser;

use gauss_remez_cli::{encode_wad_hex, ensure_precision, init_logging, parse_wad_arg};

/// Compute `erf(x)` on a WAD-scaled (`10^18`) integer argument, printing
/// a `0x`-prefixed 64-hex-digit WAD-scaled two's-complement result.
#[derive(Parser, Debug)]
struct Cli {
    /// WAD-scaled decimal integer argument.
    x: String,
}

fn main() {
    init_logging();
    ensure_precision();
    let cli = Cli::parse();

    let x = parse_wad_arg(&cli.x).expect("invalid WAD argument");
    let result = x.erf();

    println!("{}", encode_wad_hex(&result).expect("erf result always fits"));
}
