//! Rarefaction engine for Kraken output.
//!
//! # Example
//!
//! ```ignore
//! use rarefaction_core::{RunOptions, run};
//! use rarefaction_model::SamplingRate;
//!
//! let options = RunOptions::new("reads.kraken", "reads.labels", "rarefaction.csv")
//!     .with_rate(SamplingRate::new(0.1)?)
//!     .with_seed(Some(42));
//! let outcome = run(&options)?;
//! println!("{} samples", outcome.table.len());
//! ```

pub mod error;
pub mod options;
pub mod rarefier;
pub mod run;

pub use error::{Result, RunError};
pub use options::RunOptions;
pub use rarefier::{Rarefier, RunStats, generate_rarefaction};
pub use run::{RunOutcome, run};
