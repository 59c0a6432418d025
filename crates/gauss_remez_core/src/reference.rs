// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::{RemezError, RemezResult};
use gauss_remez_hpnum::HPReal;

/// From a candidate list of extrema `xs` paired with their signed errors,
/// extract exactly `w` points with strictly alternating error signs and
/// maximum summed `|error|` magnitude.
///
/// First pass: walk `xs` in order, keeping a reduced list where every
/// entry's error sign differs from its predecessor's, and where each
/// entry is the local `|error|` maximum within its sign run. Second pass:
/// among all contiguous sub-windows of the reduced list with length
/// exactly `w`, return the one maximizing the sum of `|error|`.
pub fn select_reference(xs: &[HPReal], errors: &[HPReal], w: usize) -> RemezResult<Vec<HPReal>> {
    assert_eq!(xs.len(), errors.len(), "xs/errors length mismatch");

    let mut reduced_xs: Vec<HPReal> = Vec::new();
    let mut reduced_errs: Vec<HPReal> = Vec::new();

    for (x, err) in xs.iter().zip(errors.iter()) {
        let last_sign = reduced_errs.last().map(|e: &HPReal| e.sign());
        if last_sign != Some(err.sign()) {
            reduced_xs.push(x.clone());
            reduced_errs.push(err.clone());
        } else {
            let last = reduced_errs.last().expect("last_sign implies non-empty");
            if err.abs() > last.abs() {
                *reduced_xs.last_mut().expect("non-empty") = x.clone();
                *reduced_errs.last_mut().expect("non-empty") = err.clone();
            }
        }
    }

    debug_assert!(
        reduced_errs
            .windows(2)
            .all(|pair| pair[0].sign() != pair[1].sign()),
        "reduced error signs must strictly alternate"
    );

    if reduced_xs.len() < w {
        return Err(RemezError::InsufficientExtrema {
            found: reduced_xs.len(),
            needed: w,
        });
    }

    let n = reduced_xs.len();
    let mut best_offset = 0;
    let mut best_sum: Option<HPReal> = None;

    for offset in 0..=(n - w) {
        let sum = reduced_errs[offset..offset + w]
            .iter()
            .fold(HPReal::zero(), |acc, e| &acc + &e.abs());
        let is_better = match &best_sum {
            Some(best) => sum > *best,
            None => true,
        };
        if is_better {
            best_sum = Some(sum);
            best_offset = offset;
        }
    }

    Ok(reduced_xs[best_offset..best_offset + w].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hp(v: f64) -> HPReal {
        HPReal::from_f64(v)
    }

    #[test]
    fn keeps_local_maxima_within_sign_runs() {
        let xs = vec![hp(0.0), hp(1.0), hp(2.0), hp(3.0), hp(4.0)];
        let errs = vec![hp(1.0), hp(2.0), hp(-1.0), hp(-3.0), hp(1.5)];
        let reference = select_reference(&xs, &errs, 3).unwrap();
        // within the first run (+1,+2) keep x=1 (|2| > |1|); then -1,-3 keep x=3;
        // then +1.5 -> final reference has signs +,-,+ and length 3.
        assert_eq!(reference.len(), 3);
        assert_eq!(reference[0].to_f64(), 1.0);
        assert_eq!(reference[1].to_f64(), 3.0);
        assert_eq!(reference[2].to_f64(), 4.0);
    }

    #[test]
    fn fails_with_insufficient_extrema() {
        let xs = vec![hp(0.0), hp(1.0)];
        let errs = vec![hp(1.0), hp(2.0)];
        let err = select_reference(&xs, &errs, 3).unwrap_err();
        assert!(matches!(
            err,
            RemezError::InsufficientExtrema {
                found: 1,
                needed: 3
            }
        ));
    }

    #[test]
    fn picks_window_maximizing_error_sum() {
        let xs = vec![hp(0.0), hp(1.0), hp(2.0), hp(3.0)];
        let errs = vec![hp(1.0), hp(-1.0), hp(5.0), hp(-5.0)];
        let reference = select_reference(&xs, &errs, 2).unwrap();
        // windows of len 2: [0,1] sum=2, [1,2] sum=6, [2,3] sum=10 -> pick last
        assert_eq!(reference[0].to_f64(), 2.0);
        assert_eq!(reference[1].to_f64(), 3.0);
    }
}
