//! CLI command implementations.
//!
//! Every command receives the already-initialized settings by reference and
//! writes its report to the supplied writer.

pub mod check;
pub mod show;
