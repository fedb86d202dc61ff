use anyhow::{Context, Result};
use tracing::info;

use rarefaction_cli::summary::print_summary;
use rarefaction_core::{RunOptions, run};
use rarefaction_model::SamplingRate;

use crate::cli::Cli;

pub fn run_rarefaction(cli: &Cli) -> Result<()> {
    println!("Rarefaction v{}\n", env!("CARGO_PKG_VERSION"));

    let rate = match cli.rate {
        Some(value) => SamplingRate::new(value).context("invalid --rate")?,
        None => SamplingRate::default(),
    };
    let options = RunOptions::new(&cli.untranslated, &cli.translated, &cli.output)
        .with_rate(rate)
        .with_seed(cli.seed)
        .with_format(cli.format.into());
    let outcome = run(&options).with_context(|| {
        format!(
            "generate rarefaction data from {}",
            cli.untranslated.display()
        )
    })?;
    info!(
        samples = outcome.table.len(),
        output = %outcome.output.display(),
        "rarefaction complete"
    );

    if !cli.no_summary {
        print_summary(&outcome);
    }
    println!("\nComplete!");
    Ok(())
}
