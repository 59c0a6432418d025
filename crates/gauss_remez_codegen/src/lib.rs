// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The codifier: turns a piecewise rational fit into a textual Yul-like
//! program evaluating it in Q0.96 ("X128") and WAD fixed point, for
//! consumption by a fixed-width integer virtual machine.

use std::str::FromStr;

use rug::Integer;

use gauss_remez_core::{IntervalFit, Rational};
use gauss_remez_error::{RemezError, RemezResult};
use gauss_remez_hpnum::HPReal;

/// `2^96`, the Q0.96 fixed-point scale used for the numerator/denominator
/// polynomial coefficients.
fn x128_one_hp() -> HPReal {
    HPReal::from_i64(2).pow_int(96)
}

/// `10^18`, the WAD fixed-point scale used for the leading-ratio constant.
fn wad_one_hp() -> HPReal {
    HPReal::from_i64(10).pow_int(18)
}

/// Convert `x` to a signed fixed-point integer at scale `one`, encoded as
/// a 256-bit two's-complement [`rug::Integer`].
///
/// `floor(|x| * one)` must fit in 255 bits; values outside that range
/// fail with [`RemezError::ArithmeticOverflow`] rather than silently
/// wrapping.
fn to_int(x: &HPReal, one: &HPReal) -> RemezResult<Integer> {
    let z = x.abs();
    let scaled = &z * one;
    let whole_hp = scaled.floor();
    let whole_str = whole_hp.to_integer_string().ok_or_else(|| {
        RemezError::ArithmeticOverflow(format!("{x} * scale did not round to an exact integer"))
    })?;
    let whole = Integer::from_str(&whole_str)
        .expect("HPReal::to_integer_string always yields a valid integer literal");

    let limit: Integer = Integer::from(1) << 255;
    if whole >= limit {
        return Err(RemezError::ArithmeticOverflow(format!(
            "fixed-point magnitude {whole} does not fit in 255 bits"
        )));
    }

    if x.sign() >= 0 {
        Ok(whole)
    } else {
        let modulus: Integer = Integer::from(1) << 256;
        Ok(modulus - whole)
    }
}

/// `to_int` at the Q0.96 ("X128") scale.
pub fn to_x128(x: &HPReal) -> RemezResult<Integer> {
    to_int(x, &x128_one_hp())
}

/// `to_int` at the WAD (`10^18`) scale, already 256-bit two's-complement
/// encoded. Shared with `gauss_remez_cli`, which formats the result as
/// the 64-hex-digit CLI output.
pub fn to_wad(x: &HPReal) -> RemezResult<Integer> {
    to_int(x, &wad_one_hp())
}

fn to_hex(i: &Integer) -> String {
    format!("{i:#x}")
}

/// Render a 256-bit two's-complement integer as a `0x`-prefixed,
/// zero-padded 64-hex-digit string, matching the CLI output format.
pub fn hex256(i: &Integer) -> String {
    format!("0x{i:064x}")
}

/// Divide every coefficient by the first (the leading term), returning
/// the rescaled coefficients and the divisor that was factored out.
fn normalize(coeffs: &[HPReal]) -> (Vec<HPReal>, HPReal) {
    let leading = coeffs[0].clone();
    let normalized = coeffs.iter().map(|c| c / &leading).collect();
    (normalized, leading)
}

/// Emit a Horner evaluation of a fixed-point polynomial whose
/// highest-degree coefficient has already been normalized to exactly
/// `X128_ONE` (`2^96`): `coeffs[0]` is folded into the identity step,
/// then each remaining coefficient is added after a `sar(POW, ...)`
/// fixed-point multiply-shift.
fn make_poly(coeffs: &[Integer], var_in: &str, var_out: &str) -> RemezResult<String> {
    let x128_one: Integer = Integer::from(1) << 96;
    if coeffs[0] != x128_one {
        return Err(RemezError::ArithmeticOverflow(format!(
            "leading coefficient {} != fixed-point one {x128_one}",
            coeffs[0]
        )));
    }

    let mut s = String::new();
    if coeffs.len() > 1 {
        s += &format!("let {var_out} := add({var_in}, {})\n", to_hex(&coeffs[1]));
    } else {
        s += &format!("let {var_out} := {var_in}\n");
    }

    for c in &coeffs[2..] {
        s += &format!(
            "{var_out} := add(sar(POW, mul({var_out}, {var_in})), {})\n",
            to_hex(c)
        );
    }

    Ok(s)
}

/// Emit the fixed-point evaluator for a single leaf's rational: a
/// normalized Horner numerator and denominator, combined via a final WAD
/// `sdiv`.
fn codify_leaf(approx: &Rational, var_in: &str, var_out: &str) -> RemezResult<String> {
    let (ps_norm, p) = normalize(&approx.ps);
    let (qs_norm, q) = normalize(&approx.qs);
    let first = &p / &q;

    let ps_int: Vec<Integer> = ps_norm.iter().map(to_x128).collect::<RemezResult<_>>()?;
    let qs_int: Vec<Integer> = qs_norm.iter().map(to_x128).collect::<RemezResult<_>>()?;

    let mut s = String::new();
    s += &make_poly(&ps_int, var_in, "num")?;
    s += &make_poly(&qs_int, var_in, "denom")?;
    s += &format!(
        "{var_out} := sdiv(mul({}, num), denom)\n",
        to_hex(&to_wad(&first)?)
    );
    Ok(s)
}

/// Emit a full piecewise evaluator for `fits`, bisecting the interval
/// list until each remaining group (plus a trailing "past the last
/// interval" branch when `has_end`) is 3 or fewer entries, at which point
/// a flat `if`-chain is emitted.
pub fn codify_ranges(var_in: &str, var_out: &str, fits: &[IntervalFit], has_end: bool) -> RemezResult<String> {
    let mut s = String::new();
    let total_len = fits.len() + usize::from(has_end);

    if total_len <= 3 {
        for (i, fit) in fits.iter().enumerate() {
            let position = i + 1;
            let needs_if = position < total_len;
            if needs_if {
                s += &format!("if lt({var_in}, {}) {{\n", to_hex(&to_x128(&fit.end)?));
            }
            s += &codify_leaf(&fit.approx, var_in, var_out)?;
            s += "break\n";
            if needs_if {
                s += "}\n";
            }
        }
        if has_end {
            s += &format!("{var_out} := 0\n");
            s += "break\n";
        }
        return Ok(s);
    }

    let half = total_len / 2;
    let (h1, h2) = fits.split_at(half.min(fits.len()));
    s += &format!("if lt({var_in}, {}) {{\n", to_hex(&to_x128(&h2[0].start)?));
    s += &codify_ranges(var_in, var_out, h1, false)?;
    s += "}\n";
    s += &codify_ranges(var_in, var_out, h2, has_end)?;
    Ok(s)
}

/// Codify a complete piecewise fit into a textual program reading `z`
/// and writing `y`.
pub fn codify(fits: &[IntervalFit]) -> RemezResult<String> {
    log::debug!("codifying {} leaves", fits.len());
    codify_ranges("z", "y", fits, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_remez_core::Rational;

    fn leaf(start: f64, end: f64) -> IntervalFit {
        IntervalFit {
            start: HPReal::from_f64(start),
            end: HPReal::from_f64(end),
            approx: Rational::new(
                vec![HPReal::from_f64(1.0), HPReal::from_f64(0.5)],
                vec![HPReal::from_f64(1.0)],
            ),
            err: HPReal::from_f64(1e-9),
        }
    }

    #[test]
    fn to_x128_scales_and_encodes_sign() {
        let half = HPReal::from_f64(0.5);
        let pos = to_x128(&half).unwrap();
        assert_eq!(pos, Integer::from(1) << 95);

        let neg_half = HPReal::from_f64(-0.5);
        let neg = to_x128(&neg_half).unwrap();
        let modulus: Integer = Integer::from(1) << 256;
        assert_eq!(neg, modulus - (Integer::from(1) << 95));
    }

    #[test]
    fn make_poly_rejects_non_unit_leading_coefficient() {
        let coeffs = vec![Integer::from(3), Integer::from(4)];
        let err = make_poly(&coeffs, "z", "y").unwrap_err();
        assert!(matches!(err, RemezError::ArithmeticOverflow(_)));
    }

    #[test]
    fn codify_ranges_emits_a_flat_if_chain_for_few_leaves() {
        let fits = vec![leaf(0.0, 1.0), leaf(1.0, 2.0)];
        let program = codify_ranges("z", "y", &fits, true).unwrap();
        assert!(program.contains("if lt(z,"));
        assert!(program.contains("break"));
        assert!(program.contains("y := 0"));
    }

    #[test]
    fn codify_ranges_bisects_long_lists() {
        let fits: Vec<IntervalFit> = (0..8).map(|i| leaf(i as f64, (i + 1) as f64)).collect();
        let program = codify_ranges("z", "y", &fits, true).unwrap();
        // More than one top-level `if` means the bisection kicked in.
        assert!(program.matches("if lt(z,").count() > 3);
    }
}
