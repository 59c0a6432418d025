// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_hpnum::HPReal;

/// The alternating `+1, -1, +1, ...` signs vector `s_i = (-1)^i` shared by
/// both the rational and polynomial Remez variants.
pub fn alternating_signs(w: usize) -> Vec<HPReal> {
    (0..w)
        .map(|i| {
            if i % 2 == 0 {
                HPReal::one()
            } else {
                -HPReal::one()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_starting_positive() {
        let signs = alternating_signs(4);
        assert_eq!(signs[0].sign(), 1);
        assert_eq!(signs[1].sign(), -1);
        assert_eq!(signs[2].sign(), 1);
        assert_eq!(signs[3].sign(), -1);
    }
}
