//! SMD marking code decoding.
//!
//! Three mutually exclusive schemes are recognized: R-as-decimal (`4R7`),
//! EIA-96 (`01C`), and fixed 3/4-digit (`103`, `1002`). The R scheme is
//! checked first; the check order is part of the decoding contract.

use std::fmt;

use crate::error::SmdError;
use crate::tables::{eia96_multiplier, EIA96_BASES};

/// Marking scheme a code was decoded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// R-as-decimal, e.g. `4R7` => 4.7 ohms.
    R,
    /// EIA-96 index + multiplier letter, e.g. `01C`.
    Eia96,
    /// Two significand digits + exponent digit, e.g. `103`.
    ThreeDigit,
    /// Three significand digits + exponent digit, e.g. `1002`.
    FourDigit,
}

impl Scheme {
    /// The display label for this scheme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::Eia96 => "EIA-96",
            Self::ThreeDigit => "3-digit",
            Self::FourDigit => "4-digit",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeResult {
    /// Decoded resistance in ohms. Always finite and non-negative.
    pub ohms: f64,
    /// The scheme the code matched.
    pub scheme: Scheme,
}

/// Decode an SMD resistor marking code to a resistance in ohms.
///
/// Input is trimmed, interior spaces are dropped, and letters are
/// case-folded before matching.
///
/// # Example
/// ```
/// use smdcode_core::{decode, Scheme};
///
/// let result = decode("103").unwrap();
/// assert_eq!(result.ohms, 10_000.0);
/// assert_eq!(result.scheme, Scheme::ThreeDigit);
/// ```
pub fn decode(code: &str) -> Result<DecodeResult, SmdError> {
    let normalized: String = code
        .trim()
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() {
        return Err(SmdError::invalid_code(code, "code must be non-empty"));
    }

    let result = match_schemes(code, &normalized)?;
    tracing::debug!(code = %normalized, scheme = %result.scheme, ohms = result.ohms, "decoded");
    Ok(result)
}

/// Try the three schemes in priority order against the normalized code.
/// `code` is the original input, used only for error diagnostics.
fn match_schemes(code: &str, normalized: &str) -> Result<DecodeResult, SmdError> {
    // R-as-decimal, like 4R7 or 0R0. Checked before the other schemes so
    // that any code containing R in the right position decodes as R.
    if let Some((lead, trail)) = split_r_code(normalized) {
        let lead = if lead.is_empty() { "0" } else { lead };
        let trail = if trail.is_empty() { "0" } else { trail };
        let ohms = format!("{lead}.{trail}")
            .parse::<f64>()
            .map_err(|_| SmdError::invalid_code(code, "invalid R-code digits"))?;
        // A long enough digit run parses to infinity; keep ohms finite.
        if !ohms.is_finite() {
            return Err(SmdError::invalid_code(code, "R-code value out of range"));
        }
        return Ok(DecodeResult {
            ohms,
            scheme: Scheme::R,
        });
    }

    // EIA-96, like 01C: two digits indexing the E96 table plus a
    // multiplier letter.
    if let Some((idx, letter)) = split_eia96(normalized) {
        if !(1..=96).contains(&idx) {
            return Err(SmdError::invalid_code(code, "EIA-96 index out of range"));
        }
        let base = EIA96_BASES[idx - 1];
        let Some(multiplier) = eia96_multiplier(letter) else {
            return Err(SmdError::invalid_code(
                code,
                format!("unknown EIA-96 multiplier letter: {letter}"),
            ));
        };
        return Ok(DecodeResult {
            ohms: f64::from(base) * multiplier / 100.0,
            scheme: Scheme::Eia96,
        });
    }

    // Fixed 3- or 4-digit: leading digits are the significand, the last
    // digit is the power-of-ten exponent.
    if let Some((significand, exponent, scheme)) = split_fixed_digits(normalized) {
        #[allow(clippy::cast_precision_loss)]
        let ohms = significand as f64 * 10f64.powi(exponent);
        return Ok(DecodeResult { ohms, scheme });
    }

    Err(SmdError::invalid_code(code, "unrecognized code"))
}

/// Match `<digits> R <digits>` with both digit runs optional.
/// Returns the leading and trailing digit slices, or `None` when the
/// string is not shaped like an R code.
fn split_r_code(s: &str) -> Option<(&str, &str)> {
    let idx = s.find('R')?;
    let (lead, trail) = (&s[..idx], &s[idx + 1..]);
    if all_digits(lead) && all_digits(trail) {
        Some((lead, trail))
    } else {
        None
    }
}

/// Match exactly two digits followed by one ASCII letter. Returns the
/// numeric index and the letter.
fn split_eia96(s: &str) -> Option<(usize, char)> {
    let bytes = s.as_bytes();
    if bytes.len() != 3 {
        return None;
    }
    let (d1, d2, letter) = (bytes[0], bytes[1], bytes[2]);
    if d1.is_ascii_digit() && d2.is_ascii_digit() && letter.is_ascii_alphabetic() {
        let idx = usize::from(d1 - b'0') * 10 + usize::from(d2 - b'0');
        Some((idx, char::from(letter)))
    } else {
        None
    }
}

/// Match exactly 3 or 4 decimal digits. Returns the significand, the
/// exponent digit, and the matching scheme.
fn split_fixed_digits(s: &str) -> Option<(u64, i32, Scheme)> {
    let scheme = match s.len() {
        3 => Scheme::ThreeDigit,
        4 => Scheme::FourDigit,
        _ => return None,
    };
    if !all_digits(s) {
        return None;
    }
    let (sig, exp) = s.split_at(s.len() - 1);
    // Both halves are digit-only and at most 3 characters wide.
    let significand = sig.parse::<u64>().ok()?;
    let exponent = exp.parse::<i32>().ok()?;
    Some((significand, exponent, scheme))
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
