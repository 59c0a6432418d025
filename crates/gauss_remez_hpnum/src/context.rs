// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use std::sync::OnceLock;

use gauss_remez_error::{RemezError, RemezResult};

/// Default decimal precision (digits) used when nothing has called
/// [`init`] yet, e.g. in unit tests. Production code always calls
/// [`init`] at startup.
const DEFAULT_DECIMAL_DIGITS: u32 = 60;

/// Bits-per-decimal-digit, plus a few guard bits for the conversion
/// rounding itself.
const BITS_PER_DIGIT: f64 = 3.321928094887362; // log2(10)
const GUARD_BITS: u32 = 8;

static PRECISION_BITS: OnceLock<u32> = OnceLock::new();

fn digits_to_bits(decimal_digits: u32) -> u32 {
    (decimal_digits as f64 * BITS_PER_DIGIT).ceil() as u32 + GUARD_BITS
}

/// Establish the process-wide HP precision, in decimal digits (floored at
/// 60). This is a one-time initialization: calling it twice returns
/// [`RemezError::PrecisionAlreadyInitialized`] rather than silently
/// changing precision out from under in-flight computations.
pub fn init(decimal_digits: u32) -> RemezResult<()> {
    let bits = digits_to_bits(decimal_digits.max(DEFAULT_DECIMAL_DIGITS));
    match PRECISION_BITS.set(bits) {
        Ok(()) => {
            log::info!("HP precision initialized to {decimal_digits} digits ({bits} bits)");
            Ok(())
        }
        Err(_) => Err(RemezError::PrecisionAlreadyInitialized {
            existing: *PRECISION_BITS.get().expect("just failed to set, so it's set"),
        }),
    }
}

/// Current HP precision in bits. Lazily defaults to
/// [`DEFAULT_DECIMAL_DIGITS`] if [`init`] was never called, which keeps
/// library unit tests terse without requiring explicit setup.
pub fn precision_bits() -> u32 {
    *PRECISION_BITS.get_or_init(|| digits_to_bits(DEFAULT_DECIMAL_DIGITS))
}

/// Current HP precision, in (approximate) decimal digits.
pub fn precision_digits() -> u32 {
    ((precision_bits() - GUARD_BITS) as f64 / BITS_PER_DIGIT).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision_is_at_least_sixty_digits() {
        assert!(precision_digits() >= 60);
    }

    #[test]
    fn digits_to_bits_is_monotonic() {
        assert!(digits_to_bits(60) < digits_to_bits(120));
    }
}
