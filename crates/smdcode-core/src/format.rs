//! Human-readable resistance formatting.

use crate::error::SmdError;

/// Default number of significant digits in the formatted mantissa.
pub const DEFAULT_PRECISION: usize = 3;

/// Metric units in selection order: the first factor not exceeding the
/// value wins.
const UNITS: [(f64, &str); 4] = [(1e6, "MΩ"), (1e3, "kΩ"), (1.0, "Ω"), (1e-3, "mΩ")];

/// Format a resistance in ohms as a human-readable string with a metric
/// prefix, e.g. `4.7Ω`, `10kΩ`, `1MΩ`.
///
/// `precision` is the number of significant digits in the mantissa;
/// trailing zeros are trimmed. Rounding is half-away-from-zero and the
/// output is always plain decimal (no exponent notation). Zero formats
/// as `0Ω`; other values below one milliohm fall through to `µΩ`.
///
/// # Example
/// ```
/// use smdcode_core::format_ohms;
///
/// assert_eq!(format_ohms(10_000.0, 3).unwrap(), "10kΩ");
/// ```
pub fn format_ohms(ohms: f64, precision: usize) -> Result<String, SmdError> {
    if ohms < 0.0 || ohms.is_nan() {
        return Err(SmdError::InvalidValue(ohms));
    }

    if ohms == 0.0 {
        return Ok("0Ω".to_string());
    }

    for (factor, suffix) in UNITS {
        if ohms >= factor {
            return Ok(format!("{}{suffix}", sig_digits(ohms / factor, precision)));
        }
    }

    // Below one milliohm.
    Ok(format!("{}µΩ", sig_digits(ohms / 1e-6, precision)))
}

/// Format with the default precision of 3 significant digits.
pub fn format_ohms_default(ohms: f64) -> Result<String, SmdError> {
    format_ohms(ohms, DEFAULT_PRECISION)
}

/// An f64 mantissa carries no more than 17 meaningful decimal digits;
/// larger precision requests would only push the rounding scale toward
/// infinity.
const MAX_PRECISION: usize = 17;

/// Render a positive value to `precision` significant digits with
/// trailing zeros trimmed.
fn sig_digits(value: f64, precision: usize) -> String {
    let precision = precision.clamp(1, MAX_PRECISION);
    let rounded = round_sig(value, precision);
    format!("{rounded}")
}

/// Round to `digits` significant digits, half away from zero.
#[allow(clippy::cast_possible_truncation)]
fn round_sig(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - magnitude);
    if !scale.is_finite() || scale == 0.0 {
        return value;
    }
    (value * scale).round() / scale
}
