//! CLI argument definitions for the rarefaction tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rarefaction_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rarefaction",
    version,
    about = "Generate rarefaction data from Kraken output",
    long_about = "This program generates rarefaction data from Kraken data.\n\n\
                  Reads are subsampled at every multiple of the sampling rate and the\n\
                  number of distinct taxa is reported for each principal rank.\n\
                  Built against Kraken v0.10.5-beta."
)]
pub struct Cli {
    /// Untranslated Kraken reads (the default output of `kraken`), filtered or unfiltered.
    #[arg(short = 'u', long = "untranslated", value_name = "UNTRANSLATED")]
    pub untranslated: PathBuf,

    /// Translated Kraken reads, as generated by `kraken-translate`.
    #[arg(short = 't', long = "translated", value_name = "TRANSLATED")]
    pub translated: PathBuf,

    /// File to write the rarefaction data to.
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Sampling rate in the range (0, 1].
    ///
    /// A rate of 0.1 generates 10 data points (0.1, 0.2, ..., 1.0).
    /// Defaults to 0.05.
    #[arg(short = 'r', long = "rate", value_name = "RATE")]
    pub rate: Option<f64>,

    /// Seed for the read sampler (random when omitted).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Layout of the output file.
    #[arg(long = "format", value_enum, default_value = "rows")]
    pub format: OutputFormatArg,

    /// Skip the summary table printed after the run.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// One comma-separated line per metric.
    Rows,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Rows => OutputFormat::Rows,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_required_arguments_and_defaults() {
        let cli = Cli::try_parse_from([
            "rarefaction",
            "-u",
            "reads.kraken",
            "-t",
            "reads.labels",
            "-o",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(cli.untranslated, PathBuf::from("reads.kraken"));
        assert_eq!(cli.rate, None);
        assert_eq!(cli.seed, None);
        assert!(matches!(cli.format, OutputFormatArg::Rows));
    }

    #[test]
    fn out_of_range_rate_is_left_to_the_run() {
        let cli = Cli::try_parse_from([
            "rarefaction",
            "-u",
            "a",
            "-t",
            "b",
            "-o",
            "c",
            "-r",
            "1.5",
        ])
        .unwrap();
        assert_eq!(cli.rate, Some(1.5));
    }

    #[test]
    fn requires_output() {
        let result = Cli::try_parse_from(["rarefaction", "-u", "a", "-t", "b"]);
        assert!(result.is_err());
    }
}
