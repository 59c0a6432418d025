// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::{RemezError, RemezResult};
use gauss_remez_hpnum::HPReal;

use crate::extrema::{find_extrema, full_range};
use crate::linear::solve_lin;
use crate::reference::select_reference;
use crate::remez::common::alternating_signs;

/// A fitted polynomial `P(x)`, coefficients highest-degree-first (the
/// public/artifact convention, mirroring [`crate::remez::rational::Rational`]).
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Coefficients, highest-degree-first.
    pub ps: Vec<HPReal>,
}

impl Polynomial {
    /// Build a `Polynomial` directly from highest-degree-first coefficients.
    pub fn new(ps: Vec<HPReal>) -> Self {
        Self { ps }
    }

    fn from_lowest_degree_first(ps_lo: Vec<HPReal>) -> Self {
        Self {
            ps: ps_lo.into_iter().rev().collect(),
        }
    }

    /// `P(x)` via Horner evaluation on the highest-degree-first coefficients.
    pub fn eval(&self, x: &HPReal) -> HPReal {
        let mut acc = HPReal::zero();
        for c in &self.ps {
            acc = &(&acc * x) + c;
        }
        acc
    }
}

/// One linearized solve for the polynomial Remez system: find `P` of
/// degree `n` such that `f(x_i) - P(x_i) = s_i * E` for every reference
/// point. Unlike the rational case this system is already linear in `E`,
/// so a single direct solve suffices — no fixed-point search over an
/// assumed error.
fn solve_poly(n: usize, reference: &[HPReal], ys: &[HPReal]) -> RemezResult<(Vec<HPReal>, HPReal)> {
    let w = reference.len();
    assert_eq!(w, n + 2, "reference length must equal n + 2 for polynomial Remez");
    let signs = alternating_signs(w);

    let mut matrix = Vec::with_capacity(w);
    for i in 0..w {
        let xi = &reference[i];
        let si = &signs[i];
        let mut row = Vec::with_capacity(w);
        for j in 0..=n {
            row.push(xi.pow_int(j as i32));
        }
        row.push(si.clone());
        matrix.push(row);
    }

    let params = solve_lin(&matrix, ys)?;
    let ps_lo = params[0..=n].to_vec();
    let err = params[w - 1].clone();
    Ok((ps_lo, err))
}

/// The polynomial Remez exchange algorithm: fit a polynomial of degree
/// `n` to `f` on `[start, end]`, over at most `rounds` equioscillation
/// rounds, sharing the linear solver, extrema finder and reference
/// selector with [`crate::remez::rational`].
pub fn poly_remez(
    n: usize,
    start: &HPReal,
    end: &HPReal,
    f: &impl Fn(&HPReal) -> HPReal,
    tol: &HPReal,
    rounds: usize,
    sample_scale: usize,
) -> RemezResult<(Polynomial, HPReal)> {
    if rounds == 0 {
        return Err(RemezError::InvalidArgument("rounds must be >= 1".to_string()));
    }
    if *start >= *end {
        return Err(RemezError::InvalidArgument("start must be < end".to_string()));
    }

    let w = n + 2;
    let mut reference = full_range(start, end, w);
    let mut approx = Polynomial::new(vec![HPReal::zero()]);
    let mut peak_err: Option<HPReal> = None;

    for round in 0..rounds {
        let ys: Vec<HPReal> = reference.iter().map(f).collect();
        let (ps_lo, _) = solve_poly(n, &reference, &ys)?;
        approx = Polynomial::from_lowest_degree_first(ps_lo);

        let err_fn = |x: &HPReal| f(x) - approx.eval(x);
        let extrema = find_extrema(&err_fn, start, end, tol, w * sample_scale);
        let errors: Vec<HPReal> = extrema.iter().map(&err_fn).collect();

        reference = select_reference(&extrema, &errors, w)?;

        let new_peak_err = reference
            .iter()
            .map(|x| (f(x) - approx.eval(x)).abs())
            .fold(HPReal::zero(), |acc, e| if e > acc { e } else { acc });

        log::debug!("poly_remez round {round}: peak_err = {new_peak_err}");

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
    fn fits_cubic_exactly() {
        // A degree-3 polynomial target should be recovered to near machine
        // precision by a degree-3 polynomial Remez fit.
        let f = |x: &HPReal| {
            let x2 = x * x;
            let x3 = &x2 * x;
            &(&x3 + &x2) + x
        };
        let start = HPReal::from_f64(-1.0);
        let end = HPReal::from_f64(1.0);
        let tol = HPReal::from_f64(1e-25);

        let (_poly, peak_err) = poly_remez(3, &start, &end, &f, &tol, 10, 50).unwrap();
        assert!(peak_err.to_f64() < 1e-10, "peak_err = {peak_err}");
    }
}
