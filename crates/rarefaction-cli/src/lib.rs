//! CLI library components for the rarefaction tool.

pub mod logging;
pub mod summary;
