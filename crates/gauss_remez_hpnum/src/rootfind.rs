// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::{RemezError, RemezResult};

use crate::real::HPReal;

/// Generous but bounded; the secant method converges superlinearly for the
/// smooth, well-behaved maps this solver is used on.
const MAX_ITERATIONS: usize = 200;

/// Scalar root finder: find `x` such that `f(x) == 0`, starting from
/// `x0`, to absolute tolerance `tol`.
///
/// Implemented as the secant method: tolerant of non-differentiable
/// plateaus, and starting at 0 is sufficient in practice. Unlike
/// Newton-Raphson this needs no derivative of `f`, which matters for
/// `solve_rational`'s `error_error(guessed_err) = E_solved(guessed_err) -
/// guessed_err` map, whose derivative is not available in closed form.
///
/// A thin wrapper over [`try_find_root`] for callers whose `f` cannot
/// fail.
pub fn find_root<F>(mut f: F, x0: &HPReal, tol: &HPReal) -> RemezResult<HPReal>
where
    F: FnMut(&HPReal) -> HPReal,
{
    try_find_root(move |x| Ok(f(x)), x0, tol)
}

/// The same secant root finder as [`find_root`], for callers whose `f`
/// may itself fail (e.g. because it resolves a linear system per
/// evaluation). The first `Err` returned by `f` short-circuits the
/// search.
pub fn try_find_root<F>(mut f: F, x0: &HPReal, tol: &HPReal) -> RemezResult<HPReal>
where
    F: FnMut(&HPReal) -> RemezResult<HPReal>,
{
    // Bootstrap a second point near x0; the secant method needs two.
    let bump = if x0.is_zero() {
        HPReal::from_f64(1e-2)
    } else {
        x0.abs() * HPReal::from_f64(1e-2)
    };

    let mut x_prev = x0.clone();
    let mut x_curr = x0 + &bump;
    let mut f_prev = f(&x_prev)?;
    let mut f_curr = f(&x_curr)?;

    for _ in 0..MAX_ITERATIONS {
        if f_curr.abs() <= *tol {
            return Ok(x_curr);
        }

        let denom = &f_curr - &f_prev;
        if denom.is_zero() {
            // Flat plateau: accept the current point if it is already
            // within tolerance of the previous one, otherwise we've
            // stalled and can't make further progress via the secant.
            if (&x_curr - &x_prev).abs() <= *tol {
                return Ok(x_curr);
            }
            return Err(RemezError::InvalidArgument(
                "secant root finder stalled on a flat region".to_string(),
            ));
        }

        let step = (&f_curr * &(&x_curr - &x_prev)) / denom;
        let x_next = &x_curr - &step;

        if (&x_next - &x_curr).abs() <= *tol {
            return Ok(x_next);
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(&x_curr)?;
    }

    Err(RemezError::InvalidArgument(format!(
        "secant root finder did not converge in {MAX_ITERATIONS} iterations"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sqrt_two() {
        let f = |x: &HPReal| x.pow_int(2) - HPReal::from_f64(2.0);
        let root = find_root(f, &HPReal::from_f64(1.0), &HPReal::from_f64(1e-25)).unwrap();
        assert!((root.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn finds_root_of_erf_minus_constant() {
        // erfinv(0.5) ~ 0.4769362762044699
        let target = HPReal::from_f64(0.5);
        let f = |x: &HPReal| x.erf() - target.clone();
        let root = find_root(f, &HPReal::from_f64(0.0), &HPReal::from_f64(1e-25)).unwrap();
        assert!((root.to_f64() - 0.476_936_276_204_469_9).abs() < 1e-9);
    }
}
