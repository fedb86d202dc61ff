use std::collections::HashMap;

use crate::rank::{Rank, Ranking};
use crate::rate::SamplingRate;

/// A subsample of the input reads taken at one sampling rate.
///
/// Tracks how many reads were retained and, per principal rank, how often
/// each taxon was observed among the retained classified reads.
#[derive(Debug, Clone)]
pub struct Sample {
    rate: SamplingRate,
    reads: u64,
    taxa: [HashMap<String, u64>; Rank::COUNT],
}

impl Sample {
    pub fn new(rate: SamplingRate) -> Self {
        Self {
            rate,
            reads: 0,
            taxa: std::array::from_fn(|_| HashMap::new()),
        }
    }

    pub fn rate(&self) -> SamplingRate {
        self.rate
    }

    /// Number of reads (classified or not) retained in this sample.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    pub fn count_read(&mut self) {
        self.reads += 1;
    }

    /// Record the rankings of a retained classified read.
    ///
    /// Rankings without a principal rank label are ignored.
    pub fn observe(&mut self, rankings: &[Ranking]) {
        for ranking in rankings {
            let Some(rank) = ranking.rank() else {
                continue;
            };
            let taxa = &mut self.taxa[rank.index()];
            if let Some(count) = taxa.get_mut(ranking.as_str()) {
                *count += 1;
            } else {
                taxa.insert(ranking.as_str().to_string(), 1);
            }
        }
    }

    /// Number of distinct taxa observed at `rank`.
    pub fn richness(&self, rank: Rank) -> usize {
        self.taxa[rank.index()].len()
    }

    /// How many retained reads were assigned `taxon` (full ranking string).
    pub fn occurrences(&self, rank: Rank, taxon: &str) -> u64 {
        self.taxa[rank.index()].get(taxon).copied().unwrap_or(0)
    }

    /// Observed taxa at `rank`, sorted by name.
    pub fn taxa(&self, rank: Rank) -> Vec<(&str, u64)> {
        let mut taxa: Vec<(&str, u64)> = self.taxa[rank.index()]
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        taxa.sort_unstable_by(|a, b| a.0.cmp(b.0));
        taxa
    }
}
