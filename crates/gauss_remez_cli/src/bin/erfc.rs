// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `erfc`: WAD-scaled integer complementary error function.

#![forbid(missing_docs)]

use clap::Parser;

use gauss_remez_cli::{encode_wad_hex, ensure_precision, init_logging, parse_wad_arg};

/// Compute `erfc(x)` on a WAD-scaled (`10^18`) integer argument, printing
/// a `0x`-prefixed 64-hex-digit WAD-scaled result (always nonnegative,
/// since `erfc` never goes negative on the reals).
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
    let result = x.erfc();

    println!("{}", encode_wad_hex(&result).expect("erfc result always fits"));
}
