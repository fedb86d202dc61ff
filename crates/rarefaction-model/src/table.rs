use crate::rank::Rank;
use crate::sample::Sample;

/// The rarefaction data: one [`Sample`] per scheduled rate, in ascending
/// rate order.
#[derive(Debug, Clone, Default)]
pub struct RarefactionTable {
    samples: Vec<Sample>,
}

impl RarefactionTable {
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.rate().value().total_cmp(&b.rate().value()));
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.rate().value()).collect()
    }

    pub fn reads(&self) -> Vec<u64> {
        self.samples.iter().map(Sample::reads).collect()
    }

    /// Distinct taxa per sample at `rank`.
    pub fn richness(&self, rank: Rank) -> Vec<usize> {
        self.samples.iter().map(|s| s.richness(rank)).collect()
    }

    /// The sample taken at the highest rate.
    pub fn deepest(&self) -> Option<&Sample> {
        self.samples.last()
    }
}
