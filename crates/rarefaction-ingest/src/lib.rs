//! Kraken output ingestion.
//!
//! Reads the two files Kraken v0.10.5-beta produces for a run:
//!
//! - **untranslated** (`kraken`, optionally `kraken-filter`): one line per
//!   read, starting with `C` or `U`
//! - **translated** (`kraken-translate`): one line per classified read,
//!   `READ_ID<tab>d__...|p__...|...`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rarefaction_ingest::KrakenReads;
//!
//! let mut reads = KrakenReads::open(Path::new("reads.kraken"), Path::new("reads.labels"))?;
//! for read in reads.by_ref() {
//!     let read = read?;
//!     println!("{}", read.is_classified());
//! }
//! let stats = reads.finish()?;
//! ```

mod error;
mod reader;
mod record;

// === Error Types ===
pub use error::{IngestError, Result};

// === Records ===
pub use record::{CLASSIFIED, KrakenRead, TranslatedRecord, UntranslatedRecord};

// === Streaming ===
pub use reader::{KrakenReads, PairingStats, check_input};
