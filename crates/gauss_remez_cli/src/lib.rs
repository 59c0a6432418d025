// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// gauss-remez: piecewise rational Remez approximation of the normal CDF.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Shared support for the `gauss-remez` CLI binaries: WAD-scaled decimal
//! argument parsing, 256-bit two's-complement hex formatting, logging
//! setup, and the default build configuration.

#![forbid(missing_docs)]

use rug::Integer;

use gauss_remez_error::{RemezError, RemezResult};
use gauss_remez_hpnum::HPReal;

/// The WAD scale, `10^18`, used by every CLI binary's argument and
/// output encoding.
pub fn wad_scale() -> HPReal {
    HPReal::from_i64(10).pow_int(18)
}

/// Parse a WAD-scaled decimal integer CLI argument into its real value,
/// i.e. `arg / 10^18`.
pub fn parse_wad_arg(raw: &str) -> RemezResult<HPReal> {
    let scaled = HPReal::parse_decimal(raw)
        .map_err(|_| RemezError::InvalidArgument(format!("not a decimal integer: `{raw}`")))?;
    Ok(&scaled / &wad_scale())
}

/// Encode `value` as a WAD-scaled, 256-bit two's-complement,
/// `0x`-prefixed 64-hex-digit string.
pub fn encode_wad_hex(value: &HPReal) -> RemezResult<String> {
    let encoded = gauss_remez_codegen::to_wad(value)?;
    Ok(gauss_remez_codegen::hex256(&encoded))
}

/// The hex encoding of zero, printed for domain errors instead of
/// propagating them further.
pub fn zero_hex() -> String {
    gauss_remez_codegen::hex256(&Integer::from(0))
}

/// Initialize `env_logger`, honoring `RUST_LOG`; every binary in this
/// crate calls this once at startup.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Establish the process-wide HP precision at the default of 60 decimal
/// digits. A second call within the same process (e.g. from a test
/// harness) is a no-op rather than an error.
pub fn ensure_precision() {
    let _ = gauss_remez_hpnum::init(60);
}

/// The default Interval Builder configuration: `N = M = 4` over
/// `[0, erfinv(1 - 1e-18)]`, used by the `build-tree` binary.
pub fn default_builder_config() -> RemezResult<gauss_remez_core::BuilderConfig> {
    let end = gauss_remez_hpnum::erfinv(&(&HPReal::one() - &HPReal::from_f64(1e-18)))?;
    Ok(gauss_remez_core::BuilderConfig::default_for(end))
}

/// The target function the default build fits: `f(x) = 1 - erf(x / sqrt(2))`.
pub fn target_fn(x: &HPReal) -> HPReal {
    &HPReal::one() - &(x / &HPReal::from_f64(2.0).sqrt()).erf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_encode_round_trip() {
        ensure_precision();
        let value = parse_wad_arg("1500000000000000000").unwrap();
        assert!((value.to_f64() - 1.5).abs() < 1e-12);

        let hex = encode_wad_hex(&value).unwrap();
        assert_eq!(hex.len(), 66); // "0x" + 64 hex digits
        assert!(hex.starts_with("0x"));
    }

    #[test]
    fn negative_values_wrap_to_twos_complement() {
        ensure_precision();
        let value = parse_wad_arg("-500000000000000000").unwrap();
        let hex = encode_wad_hex(&value).unwrap();
        // Two's complement of -0.5 WAD has the top nibble set (f...).
        assert!(hex.starts_with("0xf"));
    }
}
