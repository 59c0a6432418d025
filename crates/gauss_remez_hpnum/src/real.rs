// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use rug::float::Round;
use rug::ops::Pow;
use rug::Float;

use gauss_remez_error::{RemezError, RemezResult};

use crate::context::precision_bits;

/// An opaque arbitrary-precision real, backed by `rug::Float` (MPFR).
///
/// All numeric state in the Remez core is an `HPReal`; only indices and
/// polynomial degrees are plain `usize`/`i32`. Every `HPReal` carries the
/// process-wide precision established by [`crate::init`].
#[derive(Clone, Debug)]
pub struct HPReal(Float);

impl HPReal {
    /// Zero, at the current working precision.
    pub fn zero() -> Self {
        HPReal(Float::with_val(precision_bits(), 0))
    }

    /// One, at the current working precision.
    pub fn one() -> Self {
        HPReal(Float::with_val(precision_bits(), 1))
    }

    /// Build an `HPReal` from an `f64`.
    pub fn from_f64(v: f64) -> Self {
        HPReal(Float::with_val(precision_bits(), v))
    }

    /// Build an `HPReal` from an `i64`.
    pub fn from_i64(v: i64) -> Self {
        HPReal(Float::with_val(precision_bits(), v))
    }

    /// Parse an `HPReal` from a decimal string, as used by the JSON
    /// artifact format.
    pub fn parse_decimal(s: &str) -> RemezResult<Self> {
        Float::parse(s)
            .map(|parsed| HPReal(Float::with_val(precision_bits(), parsed)))
            .map_err(|e| RemezError::InvalidArgument(format!("bad decimal `{s}`: {e}")))
    }

    /// Render as an exact decimal string at the current precision.
    pub fn to_decimal_string(&self) -> String {
        // `Float`'s `Display` impl already renders base-10.
        format!("{}", self.0)
    }

    /// Wrap a raw [`rug::Float`] (used at the hpnum/external-library
    /// boundary, e.g. when consuming MPFR's native `erf`).
    pub(crate) fn from_float(f: Float) -> Self {
        HPReal(f)
    }

    /// Access the underlying [`rug::Float`] (used at the same boundary).
    pub(crate) fn as_float(&self) -> &Float {
        &self.0
    }

    /// Sign: -1, 0, or 1.
    pub fn sign(&self) -> i32 {
        match self.0.cmp0() {
            Some(Ordering::Less) => -1,
            Some(Ordering::Equal) => 0,
            Some(Ordering::Greater) => 1,
            None => 0, // NaN: treat as non-signed, callers should not hit this
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        HPReal(self.0.clone().abs())
    }

    /// `true` if exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Integer power.
    pub fn pow_int(&self, n: i32) -> Self {
        HPReal(self.0.clone().pow(n))
    }

    /// Square root.
    pub fn sqrt(&self) -> Self {
        HPReal(self.0.clone().sqrt())
    }

    /// Natural exponential.
    pub fn exp(&self) -> Self {
        HPReal(self.0.clone().exp())
    }

    /// The error function, `erf(x)`, via MPFR's native implementation.
    pub fn erf(&self) -> Self {
        HPReal(self.0.clone().erf())
    }

    /// The complementary error function, `erfc(x) = 1 - erf(x)`, via
    /// MPFR's native implementation (numerically stable in the tails,
    /// unlike subtracting `erf` from one directly).
    pub fn erfc(&self) -> Self {
        HPReal(self.0.clone().erfc())
    }

    /// Round toward zero to the nearest integer, returned as an `HPReal`.
    pub fn floor(&self) -> Self {
        HPReal(self.0.clone().floor())
    }

    /// Convert to `f64` (lossy; used only for display/logging).
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64_round(Round::Nearest)
    }

    /// `self == 0` within `tol` in absolute terms.
    pub fn is_close_to(&self, other: &HPReal, tol: &HPReal) -> bool {
        (self - other).abs().0 <= tol.0
    }

    /// The exact decimal string of this value's nearest integer, or
    /// `None` if it cannot be represented as an integer (e.g. infinite or
    /// NaN). Intended for values already rounded via [`HPReal::floor`];
    /// used at the fixed-point codegen boundary, which needs arbitrary-
    /// width integers rather than `f64`.
    pub fn to_integer_string(&self) -> Option<String> {
        self.0.to_integer().map(|i| i.to_string())
    }
}

impl FromStr for HPReal {
    type Err = RemezError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HPReal::parse_decimal(s)
    }
}

impl fmt::Display for HPReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for HPReal {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for HPReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for &HPReal {
            type Output = HPReal;
            fn $method(self, rhs: Self) -> HPReal {
                HPReal(self.0.clone().$method(&rhs.0))
            }
        }

        impl $trait for HPReal {
            type Output = HPReal;
            fn $method(self, rhs: Self) -> HPReal {
                HPReal(self.0.$method(rhs.0))
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
impl_binop!(Div, div);

impl Neg for &HPReal {
    type Output = HPReal;
    fn neg(self) -> HPReal {
        HPReal(self.0.clone().neg())
    }
}

impl Neg for HPReal {
    type Output = HPReal;
    fn neg(self) -> HPReal {
        HPReal(self.0.neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_roundtrips_through_f64() {
        let a = HPReal::from_f64(2.5);
        let b = HPReal::from_f64(1.25);
        assert!(((&a + &b).to_f64() - 3.75).abs() < 1e-12);
        assert!(((&a - &b).to_f64() - 1.25).abs() < 1e-12);
        assert!(((&a * &b).to_f64() - 3.125).abs() < 1e-12);
        assert!(((&a / &b).to_f64() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sign_and_abs() {
        let neg = HPReal::from_f64(-3.0);
        assert_eq!(neg.sign(), -1);
        assert_eq!(neg.abs().to_f64(), 3.0);
        assert_eq!(HPReal::zero().sign(), 0);
    }

    #[test]
    fn erf_matches_known_value() {
        // erf(1) ~ 0.8427007929497149
        let x = HPReal::from_f64(1.0);
        let y = x.erf().to_f64();
        assert!((y - 0.8427007929497149).abs() < 1e-12);
    }

    #[test]
    fn parse_decimal_roundtrips() {
        let x = HPReal::parse_decimal("1.5").unwrap();
        assert_eq!(x.to_f64(), 1.5);
    }
}
