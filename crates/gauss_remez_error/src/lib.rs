// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! `gauss-remez` error handling module.
//! A single error type, [`RemezError`], is shared across every crate in the
//! workspace, matching the failure kinds enumerated by the design (linear
//! solver degeneracy, reference-selection failure, CLI domain errors, and
//! codegen sanity checks).

use thiserror::Error;

/// Error type shared across the `gauss-remez` workspace.
#[derive(Debug, Error)]
pub enum RemezError {
    /// Reference selection could not find `w = N + M + 2` alternating
    /// extrema on the interval under consideration. Callers (the Interval
    /// Builder) treat this as "no fit on this interval" and bisect.
    #[error("insufficient extrema: found {found} alternating points, need {needed}")]
    InsufficientExtrema {
        /// Number of alternating extrema actually found.
        found: usize,
        /// Number required (`w = N + M + 2`).
        needed: usize,
    },

    /// The dense linear system built for a Remez round was degenerate: a
    /// diagonal pivot was exactly zero during Gauss-Jordan elimination.
    #[error("singular matrix at pivot column {column}")]
    SingularMatrix {
        /// Column index at which a zero pivot was encountered.
        column: usize,
    },

    /// A CLI argument fell outside the domain of the requested function
    /// (e.g. `erfinv` outside `(-1, 1)`). Surfaced tools emit `0` rather
    /// than propagating this further.
    #[error("domain error: {0}")]
    DomainError(String),

    /// A precondition was violated when building the dense Remez system or
    /// initializing a reference (e.g. `start >= end`, or `rounds == 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HP precision global was already initialized with a different
    /// value; precision is immutable for the lifetime of the process.
    #[error("HP precision already initialized to {existing} bits")]
    PrecisionAlreadyInitialized {
        /// The precision (in bits) that was already latched in.
        existing: u32,
    },

    /// A Remez fit's peak relative error did not reach the target on a
    /// given interval. Caught internally by the Interval Builder, which
    /// bisects and retries; never surfaces past `build`/`build_parallel`
    /// under the default configuration.
    #[error("convergence not reached: achieved {achieved}, target {target}")]
    ConvergenceNotReached {
        /// Peak relative error actually achieved, as a decimal string.
        achieved: String,
        /// Target peak relative error, as a decimal string.
        target: String,
    },

    /// A normalized leading coefficient in the codifier did not equal the
    /// fixed-point representation of one.
    #[error("codegen arithmetic overflow: normalized constant {0} != fixed-point one")]
    ArithmeticOverflow(String),

    /// Error variant arising from artifact (de)serialization.
    #[error("artifact error: {0}")]
    Artifact(#[from] serde_json::Error),

    /// Error variant arising from [`std::io`], used by the artifact and CLI
    /// layers when reading/writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the workspace.
pub type RemezResult<T> = Result<T, RemezError>;
