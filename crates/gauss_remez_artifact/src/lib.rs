// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The JSON artifact format produced by the Interval Builder and consumed
//! by the codifier: an array of per-interval rational fits, each
//! serialized as decimal strings with highest-degree-first coefficients
//! and a monic denominator.

use serde::{Deserialize, Serialize};

use gauss_remez_core::{IntervalFit, Rational};
use gauss_remez_error::RemezResult;
use gauss_remez_hpnum::HPReal;

/// The wire representation of one [`IntervalFit`]: `start`/`end`/`err` as
/// decimal strings, and the rational's coefficients as decimal strings,
/// highest-degree-first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntervalFitRecord {
    /// Left endpoint, decimal string.
    pub start: String,
    /// Right endpoint, decimal string.
    pub end: String,
    /// The fitted rational function.
    pub r#fn: RationalRecord,
    /// Peak relative error, decimal string.
    pub err: String,
}

/// The wire representation of a [`Rational`]: `ps`/`qs` as decimal
/// strings, highest-degree-first, with `qs.last() == "1"` after monic
/// normalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RationalRecord {
    /// Numerator coefficients, highest-degree-first, as decimal strings.
    pub ps: Vec<String>,
    /// Denominator coefficients, highest-degree-first, as decimal strings.
    pub qs: Vec<String>,
}

/// A full build artifact: the ordered list of per-interval fits covering
/// the domain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artifact(pub Vec<IntervalFitRecord>);

impl Artifact {
    /// Normalize a rational to be monic in its denominator (`qs[0] == 1`
    /// in highest-degree-first terms means the leading denominator
    /// coefficient is 1; the invariant is on the constant term after the
    /// solver's convention, so here we divide through by the
    /// denominator's lowest-degree coefficient, `qs.last()`), then build
    /// the wire record.
    fn rational_to_record(r: &Rational) -> RationalRecord {
        let scale = r.qs.last().cloned().unwrap_or_else(HPReal::one);
        let ps = r
            .ps
            .iter()
            .map(|c| (c / &scale).to_decimal_string())
            .collect();
        let qs = r
            .qs
            .iter()
            .map(|c| (c / &scale).to_decimal_string())
            .collect();
        RationalRecord { ps, qs }
    }

    fn record_to_rational(record: &RationalRecord) -> RemezResult<Rational> {
        let ps = record
            .ps
            .iter()
            .map(|s| HPReal::parse_decimal(s))
            .collect::<RemezResult<Vec<_>>>()?;
        let qs = record
            .qs
            .iter()
            .map(|s| HPReal::parse_decimal(s))
            .collect::<RemezResult<Vec<_>>>()?;
        Ok(Rational::new(ps, qs))
    }

    /// Build an `Artifact` from a list of [`IntervalFit`]s produced by
    /// [`gauss_remez_core::build`]/`build_parallel`.
    pub fn from_fits(fits: &[IntervalFit]) -> Self {
        Artifact(
            fits.iter()
                .map(|fit| IntervalFitRecord {
                    start: fit.start.to_decimal_string(),
                    end: fit.end.to_decimal_string(),
                    r#fn: Self::rational_to_record(&fit.approx),
                    err: fit.err.to_decimal_string(),
                })
                .collect(),
        )
    }

    /// Recover the list of [`IntervalFit`]s encoded in this artifact.
    pub fn to_fits(&self) -> RemezResult<Vec<IntervalFit>> {
        self.0
            .iter()
            .map(|record| {
                Ok(IntervalFit {
                    start: HPReal::parse_decimal(&record.start)?,
                    end: HPReal::parse_decimal(&record.end)?,
                    approx: Self::record_to_rational(&record.r#fn)?,
                    err: HPReal::parse_decimal(&record.err)?,
                })
            })
            .collect()
    }

    /// Serialize to pretty-printed JSON, matching the original
    /// `json.dump(..., indent=2)` layout.
    pub fn to_json(&self) -> RemezResult<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Parse from JSON text.
    pub fn from_json(text: &str) -> RemezResult<Self> {
        let records: Vec<IntervalFitRecord> = serde_json::from_str(text)?;
        Ok(Artifact(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let fit = IntervalFit {
            start: HPReal::from_f64(0.0),
            end: HPReal::from_f64(1.0),
            approx: Rational::new(
                vec![HPReal::from_f64(2.0), HPReal::from_f64(1.0)],
                vec![HPReal::from_f64(1.0)],
            ),
            err: HPReal::from_f64(1e-9),
        };

        let artifact = Artifact::from_fits(&[fit]);
        let json = artifact.to_json().unwrap();
        assert!(json.contains("\"start\""));

        let parsed = Artifact::from_json(&json).unwrap();
        let fits = parsed.to_fits().unwrap();
        assert_eq!(fits.len(), 1);
        assert_eq!(fits[0].start.to_f64(), 0.0);
        assert_eq!(fits[0].end.to_f64(), 1.0);
        assert_eq!(fits[0].approx.qs.last().unwrap().to_f64(), 1.0);
    }
}
