//! # smdcode-cli
//!
//! Terminal presentation for the SMD resistor code decoder.

pub mod completion;
pub mod presenter;

pub use presenter::CliPresenter;
