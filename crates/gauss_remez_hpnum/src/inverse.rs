// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::{RemezError, RemezResult};

use crate::real::HPReal;
use crate::rootfind::find_root;

/// Default absolute tolerance used by [`erfinv`]/[`erfcinv`]'s internal
/// root-find.
fn default_tol() -> HPReal {
    HPReal::from_f64(1e-30)
}

/// The inverse error function: find `x` such that `erf(x) == y`, for `y`
/// strictly inside `(-1, 1)`. MPFR has no native `erfinv`, so this is a
/// root-find over [`HPReal::erf`] seeded at zero, which is sufficient in
/// practice.
pub fn erfinv(y: &HPReal) -> RemezResult<HPReal> {
    if *y <= -HPReal::one() || *y >= HPReal::one() {
        return Err(RemezError::DomainError(format!(
            "erfinv argument {y} outside (-1, 1)"
        )));
    }
    let target = y.clone();
    let f = move |x: &HPReal| x.erf() - target.clone();
    find_root(f, &HPReal::zero(), &default_tol())
}

/// The inverse complementary error function: find `x` such that
/// `erfc(x) == y`, for `y` strictly inside `(0, 2)`, implemented as
/// `erfinv(1 - y)`.
pub fn erfcinv(y: &HPReal) -> RemezResult<HPReal> {
    if *y <= HPReal::zero() || *y >= HPReal::from_f64(2.0) {
        return Err(RemezError::DomainError(format!(
            "erfcinv argument {y} outside (0, 2)"
        )));
    }
    erfinv(&(&HPReal::one() - y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erfinv_matches_known_value() {
        let x = erfinv(&HPReal::from_f64(0.5)).unwrap();
        assert!((x.to_f64() - 0.476_936_276_204_469_9).abs() < 1e-9);
    }

    #[test]
    fn erfinv_rejects_out_of_domain() {
        let err = erfinv(&HPReal::from_f64(1.5)).unwrap_err();
        assert!(matches!(err, RemezError::DomainError(_)));
    }

    #[test]
    fn erfcinv_matches_erfinv_identity() {
        let a = erfcinv(&HPReal::from_f64(0.5)).unwrap();
        let b = erfinv(&HPReal::from_f64(0.5)).unwrap();
        assert!((a.to_f64() - b.to_f64()).abs() < 1e-9);
    }
}
