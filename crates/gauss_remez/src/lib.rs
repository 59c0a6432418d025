//! gauss-remez: piecewise rational Remez approximation of the standard
//! normal CDF, for fixed-width integer virtual machines.
//!
//! Dual licensed under Apache 2.0 and MIT.
//!
//! See:
//! - LICENSE-APACHE.md
//! - LICENSE-MIT.md
//!
//! # Installation
//!
//! In your Rust project's root directory, simply run:
//!
//! ```bash
//! cargo add gauss_remez
//! ```
//!
//! # Overview
//!
//! The workspace builds a piecewise rational fit of `1 - erf(x / sqrt(2))`
//! over arbitrary-precision arithmetic (the [`hpnum`] module), using the
//! rational Remez exchange algorithm (the [`core`] module) driven by an
//! adaptive interval tree. The fit is serialized to a JSON artifact (the
//! [`artifact`] module) and can be lowered to a fixed-point evaluator
//! program (the [`codegen`] module).

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// GLOBAL SETTINGS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

#![forbid(missing_docs)]
#![forbid(clippy::undocumented_unsafe_blocks)]

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// GAUSS-REMEZ MODULES
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// The gauss-remez prelude.
pub mod prelude {
    pub use gauss_remez_artifact::*;
    pub use gauss_remez_codegen::*;
    pub use gauss_remez_core::*;
    pub use gauss_remez_error::*;
    pub use gauss_remez_hpnum::*;
}

/// Shared error type, used across every crate in the workspace.
pub mod error {
    pub use gauss_remez_error::*;
}

/// Arbitrary-precision real arithmetic.
pub mod hpnum {
    pub use gauss_remez_hpnum::*;
}

/// Linear solver, extrema finder, reference selector, Remez variants, and
/// the adaptive Interval Builder.
pub mod core {
    pub use gauss_remez_core::*;
}

/// JSON artifact (de)serialization.
pub mod artifact {
    pub use gauss_remez_artifact::*;
}

/// The fixed-point codifier.
pub mod codegen {
    pub use gauss_remez_codegen::*;
}
