// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `cdf`: WAD-scaled integer normal cumulative distribution function.

#![forbid(missing_docs)]

use clap::Parser;

use gauss_remez_cli::{encode_wad_hex, ensure_precision, init_logging, parse_wad_arg};
use gauss_remez_hpnum::HPReal;

/// Compute the normal CDF of `x` given mean `mu` and standard deviation
/// `sigma`, all WAD-scaled (`10^18`) integers: `cdf(x, mu, sigma) =
/// erfc(-(x - mu) / (sigma * sqrt(2))) / 2`.
#[derive(Parser, Debug)]
struct Cli {
    /// WAD-scaled decimal integer `x`.
    x: String,
    /// WAD-scaled decimal integer mean.
    mu: String,
    /// WAD-scaled decimal integer standard deviation.
    sigma: String,
}

fn cdf(x: &HPReal, mu: &HPReal, sigma: &HPReal) -> HPReal {
    let two_sqrt = HPReal::from_f64(2.0).sqrt();
    let z = -&(&(x - mu) / &(sigma * &two_sqrt));
    &z.erfc() / &HPReal::from_f64(2.0)
}

fn main() {
    init_logging();
    ensure_precision();
    let cli = Cli::parse();

    let x = parse_wad_arg(&cli.x).expect("invalid WAD argument");
    let mu = parse_wad_arg(&cli.mu).expect("invalid WAD argument");
    let sigma = parse_wad_arg(&cli.sigma).expect("invalid WAD argument");

    let result = cdf(&x, &mu, &sigma).abs();

    println!("{}", encode_wad_hex(&result).expect("cdf result always fits"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_of_mean_is_one_half() {
        gauss_remez_hpnum::init(60).ok();
        let mu = HPReal::from_f64(0.0);
        let sigma = HPReal::from_f64(1.0);
        let result = cdf(&mu, &mu, &sigma);
        assert!((result.to_f64() - 0.5).abs() < 1e-9);
    }
}
