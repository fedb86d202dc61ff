use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span};

use rarefaction_ingest::KrakenReads;
use rarefaction_model::{RarefactionTable, Rank};
use rarefaction_output::write_table_to_path;

use crate::error::Result;
use crate::options::RunOptions;
use crate::rarefier::{RunStats, generate_rarefaction};

/// Result of [`run`].
#[derive(Debug)]
pub struct RunOutcome {
    pub table: RarefactionTable,
    pub stats: RunStats,
    pub output: PathBuf,
    /// Seed actually used, so an unseeded run can be repeated.
    pub seed: u64,
}

/// Generate rarefaction data for `options` and write it to the output file.
pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let span = info_span!(
        "rarefaction",
        untranslated = %options.untranslated.display(),
        translated = %options.translated.display()
    );
    let _guard = span.enter();

    options.validate()?;
    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(rate = %options.rate, seed, "generating rarefaction data");

    let start = Instant::now();
    let mut reads = KrakenReads::open(&options.untranslated, &options.translated)?;
    let (table, mut stats) =
        generate_rarefaction(reads.by_ref(), options.rate, StdRng::seed_from_u64(seed))?;
    let pairing = reads.finish()?;
    stats.mismatched_ids = pairing.mismatched_ids;
    stats.unused_translations = pairing.unused_translations;
    info!(
        reads = stats.total_reads,
        classified = stats.classified_reads,
        samples = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "sampling complete"
    );
    for sample in table.samples() {
        debug!(
            rate = %sample.rate(),
            reads = sample.reads(),
            species = sample.richness(Rank::Species),
            genera = sample.richness(Rank::Genus),
            "sample"
        );
    }

    write_table_to_path(&table, options.format, &options.output)?;
    info!(output = %options.output.display(), format = %options.format, "output written");

    Ok(RunOutcome {
        table,
        stats,
        output: options.output.clone(),
        seed,
    })
}
