// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `ppf`: WAD-scaled integer normal percent-point (quantile) function.

#![forbid(missing_docs)]

use clap::Parser;

use gauss_remez_cli::{encode_wad_hex, ensure_precision, init_logging, parse_wad_arg, zero_hex};
use gauss_remez_hpnum::HPReal;

/// Compute the normal quantile of `x` given mean `mu` and standard
/// deviation `sigma`, all WAD-scaled (`10^18`) integers: `ppf(x, mu,
/// sigma) = mu - sigma * sqrt(2) * erfinv(1 - 2x)`. An argument outside
/// the implied `erfinv` domain prints the hex encoding of `0` rather than
/// failing.
#[derive(Parser, Debug)]
struct Cli {
    /// WAD-scaled decimal integer `x`, a probability in `(0, 1)`.
    x: String,
    /// WAD-scaled decimal integer mean.
    mu: String,
    /// WAD-scaled decimal integer standard deviation.
    sigma: String,
}

fn ppf(x: &HPReal, mu: &HPReal, sigma: &HPReal) -> gauss_remez_error::RemezResult<HPReal> {
    let arg = &HPReal::one() - &(&HPReal::from_f64(2.0) * x);
    let inv = gauss_remez_hpnum::erfinv(&arg)?;
    let two_sqrt = HPReal::from_f64(2.0).sqrt();
    Ok(mu - &(&(sigma * &two_sqrt) * &inv))
}

fn main() {
    init_logging();
    ensure_precision();
    let cli = Cli::parse();

    let x = parse_wad_arg(&cli.x).expect("invalid WAD argument");
    let mu = parse_wad_arg(&cli.mu).expect("invalid WAD argument");
    let sigma = parse_wad_arg(&cli.sigma).expect("invalid WAD argument");

    let out = match ppf(&x, &mu, &sigma) {
        Ok(result) => encode_wad_hex(&result).expect("ppf result always fits"),
        Err(err) => {
            log::warn!("ppf domain error: {err}");
            zero_hex()
        }
    };

    println!("{out}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppf_of_one_half_is_the_mean() {
        gauss_remez_hpnum::init(60).ok();
        let mu = HPReal::from_f64(1.0);
        let sigma = HPReal::from_f64(2.0);
        let result = ppf(&HPReal::from_f64(0.5), &mu, &sigma).unwrap();
        assert!((result.to_f64() - 1.0).abs() < 1e-9);
    }
}
