//! Per-read subsampling.
//!
//! Every read gets exactly one uniform draw `u` in `[0, 1)`. The read is
//! retained by every sample whose rate is at least `u`, so a sample at a
//! higher rate always contains the reads of every lower-rate sample. This
//! nesting is what makes the resulting table a rarefaction curve.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use rarefaction_ingest::KrakenRead;
use rarefaction_model::{RarefactionTable, Sample, SamplingRate};

use crate::error::Result;

/// Counters of a finished rarefaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub total_reads: u64,
    pub classified_reads: u64,
    pub mismatched_ids: u64,
    pub unused_translations: u64,
}

/// Accumulates reads into one [`Sample`] per scheduled rate.
pub struct Rarefier<R> {
    samples: Vec<Sample>,
    rng: R,
    stats: RunStats,
}

impl<R: Rng> Rarefier<R> {
    /// One sample per point of the schedule induced by the step `rate`.
    pub fn new(rate: SamplingRate, rng: R) -> Result<Self> {
        let samples: Vec<Sample> = rate.schedule()?.into_iter().map(Sample::new).collect();
        debug!(step = %rate, samples = samples.len(), "initialized samples");
        Ok(Self {
            samples,
            rng,
            stats: RunStats::default(),
        })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn observe(&mut self, read: &KrakenRead) {
        let draw: f64 = self.rng.r#gen();
        self.observe_with_draw(read, draw);
    }

    /// Apply `read` with a fixed draw instead of one from the generator.
    pub fn observe_with_draw(&mut self, read: &KrakenRead, draw: f64) {
        self.stats.total_reads += 1;
        if read.is_classified() {
            self.stats.classified_reads += 1;
        }
        // Samples are in ascending rate order, so the retaining samples are a suffix.
        let first = self
            .samples
            .partition_point(|sample| !sample.rate().includes(draw));
        for sample in &mut self.samples[first..] {
            sample.count_read();
            if let KrakenRead::Classified { rankings, .. } = read {
                sample.observe(rankings);
            }
        }
    }

    pub fn finish(self) -> (RarefactionTable, RunStats) {
        (RarefactionTable::new(self.samples), self.stats)
    }
}

/// Run every read of `reads` through a fresh [`Rarefier`].
pub fn generate_rarefaction<I, R>(
    reads: I,
    rate: SamplingRate,
    rng: R,
) -> Result<(RarefactionTable, RunStats)>
where
    I: IntoIterator<Item = rarefaction_ingest::Result<KrakenRead>>,
    R: Rng,
{
    let mut rarefier = Rarefier::new(rate, rng)?;
    for read in reads {
        rarefier.observe(&read?);
    }
    Ok(rarefier.finish())
}
