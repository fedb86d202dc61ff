//! Line-level parsing of Kraken output.

use rarefaction_model::{Ranking, parse_classification};

/// Status code of a classified read in untranslated output.
pub const CLASSIFIED: char = 'C';

/// A line of untranslated `kraken` output.
///
/// Only the status and read id are used; taxon ids and k-mer mappings are
/// resolved through the translated file instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedRecord {
    pub classified: bool,
    pub read_id: Option<String>,
}

impl UntranslatedRecord {
    /// Parse a line. Any line not starting with the classified status,
    /// blank lines included, is an unclassified read.
    pub fn parse(line: &str) -> Self {
        Self {
            classified: line.starts_with(CLASSIFIED),
            read_id: line.split_whitespace().nth(1).map(str::to_string),
        }
    }
}

/// A line of `kraken-translate` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedRecord {
    pub read_id: String,
    pub rankings: Vec<Ranking>,
}

impl TranslatedRecord {
    /// Parse a line. Returns `None` when the read id or classification is
    /// missing.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let read_id = tokens.next()?;
        let classification = tokens.next()?;
        Some(Self {
            read_id: read_id.to_string(),
            rankings: parse_classification(classification),
        })
    }
}

/// A read paired with its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KrakenRead {
    Unclassified,
    Classified {
        read_id: String,
        rankings: Vec<Ranking>,
    },
}

impl KrakenRead {
    pub fn is_classified(&self) -> bool {
        matches!(self, KrakenRead::Classified { .. })
    }

    /// Rankings of a classified read; empty for unclassified reads.
    pub fn rankings(&self) -> &[Ranking] {
        match self {
            KrakenRead::Unclassified => &[],
            KrakenRead::Classified { rankings, .. } => rankings,
        }
    }
}
