// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use gauss_remez_error::RemezResult;
use gauss_remez_hpnum::HPReal;

use crate::remez::{rational_remez, Rational};

/// One leaf of the adaptive piecewise fit: a rational approximation valid
/// on `[start, end]`, with its achieved peak relative error.
#[derive(Clone, Debug)]
pub struct IntervalFit {
    /// Left endpoint of the interval, inclusive.
    pub start: HPReal,
    /// Right endpoint of the interval, inclusive.
    pub end: HPReal,
    /// The fitted rational function.
    pub approx: Rational,
    /// Peak relative error achieved by `approx` over `[start, end]`.
    pub err: HPReal,
}

/// Configuration for the Interval Builder.
#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Numerator degree passed to every rational Remez fit.
    pub n: usize,
    /// Denominator degree passed to every rational Remez fit.
    pub m: usize,
    /// Domain start.
    pub start: HPReal,
    /// Domain end.
    pub end: HPReal,
    /// Extremum-refinement tolerance passed to `rational_remez`.
    pub tolerance: HPReal,
    /// A leaf is accepted once its peak relative error is at most this.
    pub target_error: HPReal,
    /// Maximum equioscillation rounds per `rational_remez` call.
    pub rounds: usize,
    /// Extremum sampling density multiplier (`samples = w * sample_scale`).
    pub sample_scale: usize,
}

impl BuilderConfig {
    /// The default configuration for fitting the standard normal CDF:
    /// `N = M = 4`, `START = 0`, `END = erfinv(1 - 1e-18)`,
    /// `TOLERANCE = 1e-30`, `TARGET_ERROR = 1e-8`, `DEFAULT_ROUNDS = 20`,
    /// target function `f(x) = 1 - erf(x / sqrt(2))`.
    pub fn default_for(end: HPReal) -> Self {
        Self {
            n: 4,
            m: 4,
            start: HPReal::zero(),
            end,
            tolerance: HPReal::from_f64(1e-30),
            target_error: HPReal::from_f64(1e-8),
            rounds: 20,
            sample_scale: 80,
        }
    }
}

/// Adaptively bisect `[config.start, config.end]` until every leaf's
/// rational Remez fit meets `config.target_error`, using an explicit work
/// queue rather than native recursion so the stack depth stays bounded
/// regardless of how finely the domain must be split.
pub fn build(f: &impl Fn(&HPReal) -> HPReal, config: &BuilderConfig) -> RemezResult<Vec<IntervalFit>> {
    let mut queue = vec![(config.start.clone(), config.end.clone())];
    let mut leaves = Vec::new();

    while let Some((start, end)) = queue.pop() {
        match try_fit(f, &start, &end, config) {
            Ok(fit) => leaves.push(fit),
            Err(_) => {
                let mid = &(&start + &end) / &HPReal::from_f64(2.0);
                log::debug!(
                    "bisecting [{start}, {end}] at {mid}: target error not met"
                );
                queue.push((mid.clone(), end));
                queue.push((start, mid));
            }
        }
    }

    leaves.sort_by(|a, b| a.start.partial_cmp(&b.start).expect("HPReal is totally ordered in practice"));
    Ok(leaves)
}

/// The same adaptive bisection as [`build`], but leaves that still need
/// splitting are processed with a `rayon` work-stealing pool rather than
/// a sequential queue. Each queue entry is independent: no new global
/// state is established per worker, since HP precision is process-wide
/// and immutable once initialized.
#[cfg(feature = "parallel")]
pub fn build_parallel(
    f: &(impl Fn(&HPReal) -> HPReal + Sync),
    config: &BuilderConfig,
) -> RemezResult<Vec<IntervalFit>> {
    use rayon::prelude::*;
    use std::sync::Mutex;

    let leaves = Mutex::new(Vec::new());
    let mut frontier = vec![(config.start.clone(), config.end.clone())];

    while !frontier.is_empty() {
        let next_frontier: Vec<(HPReal, HPReal)> = frontier
            .into_par_iter()
            .flat_map_iter(|(start, end)| match try_fit(f, &start, &end, config) {
                Ok(fit) => {
                    leaves.lock().expect("leaves mutex poisoned").push(fit);
                    Vec::new().into_iter()
                }
                Err(_) => {
                    let mid = &(&start + &end) / &HPReal::from_f64(2.0);
                    vec![(mid.clone(), end), (start, mid)].into_iter()
                }
            })
            .collect();
        frontier = next_frontier;
    }

    let mut leaves = leaves.into_inner().expect("leaves mutex poisoned");
    leaves.sort_by(|a, b| a.start.partial_cmp(&b.start).expect("HPReal is totally ordered in practice"));
    Ok(leaves)
}

fn try_fit(
    f: &impl Fn(&HPReal) -> HPReal,
    start: &HPReal,
    end: &HPReal,
    config: &BuilderConfig,
) -> RemezResult<IntervalFit> {
    let (approx, err) = rational_remez(
        config.n,
        config.m,
        start,
        end,
        f,
        &config.tolerance,
        config.rounds,
        config.sample_scale,
    )?;

    if err > config.target_error {
        return Err(gauss_remez_error::RemezError::ConvergenceNotReached {
            achieved: err.to_decimal_string(),
            target: config.target_error.to_decimal_string(),
        });
    }

    Ok(IntervalFit {
        start: start.clone(),
        end: end.clone(),
        approx,
        err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_tree_covering_full_domain() {
        let f = |x: &HPReal| x.exp();
        let mut config = BuilderConfig::default_for(HPReal::from_f64(1.0));
        config.target_error = HPReal::from_f64(1e-6);
        config.rounds = 12;

        let leaves = build(&f, &config).unwrap();
        assert!(!leaves.is_empty());
        assert_eq!(leaves.first().unwrap().start.to_f64(), 0.0);
        assert_eq!(leaves.last().unwrap().end.to_f64(), 1.0);
        for pair in leaves.windows(2) {
            assert_eq!(pair[0].end.to_decimal_string(), pair[1].start.to_decimal_string());
        }
        for leaf in &leaves {
            assert!(leaf.err.to_f64() <= config.target_error.to_f64());
        }
    }
}
