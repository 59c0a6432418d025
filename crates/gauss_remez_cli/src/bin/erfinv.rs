// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `erfinv`: WAD-scaled integer inverse error function.

#![forbid(missing_docs)]

use clap::Parser;

use gauss_remez_cli::{encode_wad_hex, ensure_precision, init_logging, parse_wad_arg, zero_hex};

/// Compute `erfinv(x)` on a WAD-scaled (`10^18`) integer argument,
/// printing a `0x`-prefixed 64-hex-digit WAD-scaled two's-complement
/// result. An argument outside `(-1, 1)` prints the hex encoding of `0`
/// rather than failing.
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
    let out = match gauss_remez_hpnum::erfinv(&x) {
        Ok(result) => encode_wad_hex(&result).expect("erfinv result always fits"),
        Err(err) => {
            log::warn!("erfinv domain error: {err}");
            zero_hex()
        }
    };

    println!("{out}");
}
