// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::{RemezError, RemezResult};
use gauss_remez_hpnum::HPReal;

/// Solve the dense `n x n` system `A x = b` over [`HPReal`] by in-place
/// Gauss-Jordan elimination, without pivoting.
///
/// For each column `i`: scale row `i` by `1 / A[i][i]`, then subtract
/// `A[j][i] * row_i` from every other row `j` (and the matching entries of
/// `b`), driving `A` toward the identity matrix. Fails with
/// [`RemezError::SingularMatrix`] if a diagonal pivot is exactly zero at
/// its step; callers (the Remez round) treat this as a degenerate
/// reference and bisect.
///
/// The lack of pivoting is deliberate: references are well-separated and
/// HP precision is high, so it is acceptable in practice. Partial
/// pivoting would be a valid refinement but is not required by the
/// contract.
pub fn solve_lin(matrix: &[Vec<HPReal>], rhs: &[HPReal]) -> RemezResult<Vec<HPReal>> {
    let n = matrix.len();
    assert!(n > 0, "matrix must be non-empty");
    assert_eq!(n, rhs.len(), "matrix/rhs size mismatch");
    assert!(
        matrix.iter().all(|row| row.len() == n),
        "matrix must be square"
    );

    let mut a: Vec<Vec<HPReal>> = matrix.to_vec();
    let mut out: Vec<HPReal> = rhs.to_vec();

    for i in 0..n {
        let pivot = a[i][i].clone();
        if pivot.is_zero() {
            return Err(RemezError::SingularMatrix { column: i });
        }
        let factor = &HPReal::one() / &pivot;

        a[i] = a[i].iter().map(|c| c * &factor).collect();
        out[i] = &out[i] * &factor;

        let row_i = a[i].clone();
        let out_i = out[i].clone();

        for j in 0..n {
            if j == i {
                continue;
            }
            let u = a[j][i].clone();
            if u.is_zero() {
                continue;
            }
            for k in 0..n {
                a[j][k] = &a[j][k] - &(&u * &row_i[k]);
            }
            out[j] = &out[j] - &(&u * &out_i);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hp(v: f64) -> HPReal {
        HPReal::from_f64(v)
    }

    #[test]
    fn solves_identity_system() {
        let matrix = vec![
            vec![hp(1.0), hp(0.0)],
            vec![hp(0.0), hp(1.0)],
        ];
        let rhs = vec![hp(3.0), hp(4.0)];
        let x = solve_lin(&matrix, &rhs).unwrap();
        assert_eq!(x[0].to_f64(), 3.0);
        assert_eq!(x[1].to_f64(), 4.0);
    }

    #[test]
    fn solves_two_by_two_system() {
        // 2x + y = 5
        // x - y = 1
        // => x = 2, y = 1
        let matrix = vec![vec![hp(2.0), hp(1.0)], vec![hp(1.0), hp(-1.0)]];
        let rhs = vec![hp(5.0), hp(1.0)];
        let x = solve_lin(&matrix, &rhs).unwrap();
        assert!((x[0].to_f64() - 2.0).abs() < 1e-12);
        assert!((x[1].to_f64() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn singular_matrix_is_detected() {
        let matrix = vec![vec![hp(0.0), hp(1.0)], vec![hp(0.0), hp(1.0)]];
        let rhs = vec![hp(1.0), hp(1.0)];
        let err = solve_lin(&matrix, &rhs).unwrap_err();
        assert!(matches!(err, RemezError::SingularMatrix { column: 0 }));
    }
}
