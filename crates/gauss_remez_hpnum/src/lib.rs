// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Arbitrary-precision real arithmetic (`HPReal`) backed by `rug`'s MPFR
//! bindings, plus the handful of generic numerical primitives the Remez
//! core is built on: a process-wide precision setting, central-difference
//! derivatives, Horner polynomial evaluation, and a secant scalar root
//! finder.

mod context;
mod deriv;
mod inverse;
mod polyval;
mod real;
mod rootfind;

pub use context::{init, precision_bits, precision_digits};
pub use deriv::derivative;
pub use inverse::{erfcinv, erfinv};
pub use polyval::polyval;
pub use real::HPReal;
pub use rootfind::{find_root, try_find_root};
