//! smdcode library — application logic for the SMD resistor code decoder.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
