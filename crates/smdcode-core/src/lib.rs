//! # smdcode-core
//!
//! Codec for SMD (surface-mount device) resistor marking codes.
//! Decodes 3-digit, 4-digit, R-as-decimal, and EIA-96 codes into
//! resistance values, and formats resistances back into metric-prefixed
//! display strings.
//!
//! Both operations are pure: same input, same output, no shared mutable
//! state. The only process-wide data are the read-only EIA-96 tables.

pub mod decode;
pub mod error;
pub mod format;
pub mod tables;

// Re-exports
pub use decode::{decode, DecodeResult, Scheme};
pub use error::SmdError;
pub use format::{format_ohms, format_ohms_default, DEFAULT_PRECISION};
pub use tables::{eia96_multiplier, EIA96_BASES};
