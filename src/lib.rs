//! Workspace-level integration test carrier for smdcode.
//!
//! The actual library code lives in `crates/smdcode-core` and friends;
//! this package only exists to host the golden-file tests under `tests/`.
