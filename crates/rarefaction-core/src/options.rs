use std::path::PathBuf;

use rarefaction_ingest::check_input;
use rarefaction_model::SamplingRate;
use rarefaction_output::OutputFormat;

use crate::error::Result;

/// Inputs and settings for one rarefaction run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Untranslated `kraken` output (filtered or unfiltered).
    pub untranslated: PathBuf,
    /// `kraken-translate` output for the same reads.
    pub translated: PathBuf,
    /// Destination of the rarefaction data.
    pub output: PathBuf,
    /// Step between data points.
    pub rate: SamplingRate,
    /// Random seed; drawn from the OS when absent.
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl RunOptions {
    pub fn new(
        untranslated: impl Into<PathBuf>,
        translated: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            untranslated: untranslated.into(),
            translated: translated.into(),
            output: output.into(),
            rate: SamplingRate::default(),
            seed: None,
            format: OutputFormat::default(),
        }
    }

    #[must_use]
    pub fn with_rate(mut self, rate: SamplingRate) -> Self {
        self.rate = rate;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Check that both input files exist.
    pub fn validate(&self) -> Result<()> {
        check_input(&self.untranslated)?;
        check_input(&self.translated)?;
        Ok(())
    }
}
