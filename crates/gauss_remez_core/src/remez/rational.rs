// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::{RemezError, RemezResult};
use gauss_remez_hpnum::{try_find_root, HPReal};

use crate::extrema::{find_extrema, full_range};
use crate::linear::solve_lin;
use crate::reference::select_reference;
use crate::remez::common::alternating_signs;

/// A fitted rational function `R(x) = P(x) / Q(x)`.
///
/// `ps` and `qs` are **highest-degree-first** — the public/artifact
/// convention — so that [`Rational::eval`] is a plain Horner evaluation
/// with no reversal at the call site. The solver's internal
/// lowest-degree-first convention is reversed exactly once, in
/// [`Rational::from_lowest_degree_first`].
#[derive(Clone, Debug)]
pub struct Rational {
    /// Numerator coefficients, highest-degree-first.
    pub ps: Vec<HPReal>,
    /// Denominator coefficients, highest-degree-first. `qs.last()` is `1`
    /// after monic normalization.
    pub qs: Vec<HPReal>,
}

impl Rational {
    /// Build a `Rational` directly from highest-degree-first coefficients.
    pub fn new(ps: Vec<HPReal>, qs: Vec<HPReal>) -> Self {
        Self { ps, qs }
    }

    /// The single boundary where the solver's lowest-degree-first
    /// coefficients are reversed into the public highest-degree-first
    /// convention.
    fn from_lowest_degree_first(ps_lo: Vec<HPReal>, qs_lo: Vec<HPReal>) -> Self {
        Self {
            ps: ps_lo.into_iter().rev().collect(),
            qs: qs_lo.into_iter().rev().collect(),
        }
    }

    /// `P(x)`, via Horner on the highest-degree-first coefficients.
    pub fn p(&self, x: &HPReal) -> HPReal {
        horner(&self.ps, x)
    }

    /// `Q(x)`, via Horner on the highest-degree-first coefficients.
    pub fn q(&self, x: &HPReal) -> HPReal {
        horner(&self.qs, x)
    }

    /// `R(x) = P(x) / Q(x)`.
    pub fn eval(&self, x: &HPReal) -> HPReal {
        &self.p(x) / &self.q(x)
    }
}

fn horner(coeffs_hi: &[HPReal], x: &HPReal) -> HPReal {
    let mut acc = HPReal::zero();
    for c in coeffs_hi {
        acc = &(&acc * x) + c;
    }
    acc
}

/// One linearized solve of the rational system for an assumed
/// equioscillation error `guessed_err`: find `P` (degree `n`) and `Q`
/// (degree `m`, leading/constant term free — monic normalization happens
/// afterward) such that `f(x_i) - P(x_i)/Q(x_i) = s_i * guessed_err` for
/// every reference point, after multiplying through by `Q` to linearize.
///
/// Returns `(ps_lo, qs_tail_lo, solved_err)`, all in lowest-degree-first
/// form (`qs_tail_lo` omits the constant term, which the caller fixes to
/// `1` after finding the equioscillation error).
fn solve_with_assumed_error(
    n: usize,
    m: usize,
    guessed_err: &HPReal,
    reference: &[HPReal],
    ys: &[HPReal],
) -> RemezResult<(Vec<HPReal>, Vec<HPReal>, HPReal)> {
    let w = reference.len();
    let signs = alternating_signs(w);

    let mut matrix = Vec::with_capacity(w);
    for i in 0..w {
        let xi = &reference[i];
        let yi = &ys[i];
        let si = &signs[i];

        let mut row = Vec::with_capacity(w);
        for j in 0..=n {
            row.push(xi.pow_int(j as i32));
        }
        for j in 1..=m {
            let coeff = &(&(si * guessed_err) - yi) * &xi.pow_int(j as i32);
            row.push(coeff);
        }
        row.push(si.clone());
        matrix.push(row);
    }

    let params = solve_lin(&matrix, ys)?;

    let ps_lo = params[0..=n].to_vec();
    let qs_tail_lo = params[n + 1..n + 1 + m].to_vec();
    let solved_err = params[w - 1].clone();

    Ok((ps_lo, qs_tail_lo, solved_err))
}

/// Find the equioscillation error `E` as the fixed point of
/// `guessed_err -> solved_err(guessed_err)` via [`try_find_root`], then
/// resolve the system at that error.
fn solve_rational(
    n: usize,
    m: usize,
    reference: &[HPReal],
    ys: &[HPReal],
    tol: &HPReal,
) -> RemezResult<(Vec<HPReal>, Vec<HPReal>, HPReal)> {
    let error_error = |guessed: &HPReal| -> RemezResult<HPReal> {
        let (_, _, solved) = solve_with_assumed_error(n, m, guessed, reference, ys)?;
        Ok(&solved - guessed)
    };

    let found_err = try_find_root(error_error, &HPReal::zero(), tol)?;

    solve_with_assumed_error(n, m, &found_err, reference, ys)
}

/// The rational Remez exchange algorithm: fit a rational `P/Q` of degrees
/// `(n, m)` to `f` on `[start, end]`, to within `tol` on the extremum
/// refinement, over at most `rounds` equioscillation rounds.
///
/// Returns the fitted [`Rational`] and its peak relative error over the
/// final reference. `sample_scale` controls how densely the extremum
/// search samples each round (`samples = w * sample_scale`, default 80).
#[allow(clippy::too_many_arguments)]
pub fn rational_remez(
    n: usize,
    m: usize,
    start: &HPReal,
    end: &HPReal,
    f: &impl Fn(&HPReal) -> HPReal,
    tol: &HPReal,
    rounds: usize,
    sample_scale: usize,
) -> RemezResult<(Rational, HPReal)> {
    if rounds == 0 {
        return Err(RemezError::InvalidArgument("rounds must be >= 1".to_string()));
    }
    if *start >= *end {
        return Err(RemezError::InvalidArgument("start must be < end".to_string()));
    }

    let w = n + m + 2;
    let mut reference = full_range(start, end, w);
    let mut approx = Rational::new(vec![HPReal::zero()], vec![HPReal::one()]);
    let mut peak_err: Option<HPReal> = None;

    for round in 0..rounds {
        let ys: Vec<HPReal> = reference.iter().map(f).collect();

        let (ps_lo, qs_tail_lo, _) = solve_rational(n, m, &reference, &ys, tol)?;
        let mut qs_lo = Vec::with_capacity(qs_tail_lo.len() + 1);
        qs_lo.push(HPReal::one());
        qs_lo.extend(qs_tail_lo);

        approx = Rational::from_lowest_degree_first(ps_lo, qs_lo);

        let err_fn = |x: &HPReal| f(x) - approx.eval(x);
        let extrema = find_extrema(&err_fn, start, end, tol, w * sample_scale);
        let errors: Vec<HPReal> = extrema.iter().map(&err_fn).collect();

        reference = select_reference(&extrema, &errors, w)?;

        let new_peak_err = reference
            .iter()
            .map(|x| (&HPReal::one() - &(f(x) / approx.eval(x))).abs())
            .fold(HPReal::zero(), |acc, e| if e > acc { e } else { acc });

        log::debug!("rational_remez round {round}: peak_err = {new_peak_err}");

        let converged = peak_err.as_ref() == Some(&new_peak_err);
        peak_err = Some(new_peak_err);
        if converged {
            break;
        }
    }

    let peak = peak_err.expect("rounds >= 1 guarantees at least one iteration ran");
    Ok((approx, peak))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exp_on_unit_interval() {
        let start = HPReal::zero();
        let end = HPReal::one();
        let tol = HPReal::from_f64(1e-25);
        let f = |x: &HPReal| x.exp();

        let (_rational, peak_err) =
            rational_remez(2, 2, &start, &end, &f, &tol, 15, 80).unwrap();

        assert!(
            peak_err.to_f64() <= 1e-6,
            "peak_err = {peak_err} exceeded 1e-6"
        );
    }
}
