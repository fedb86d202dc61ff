//! Principal taxonomic ranks and `kraken-translate` ranking strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the rank label and the taxon name (`d__Bacteria`).
pub const KRAKEN_SEPARATOR: &str = "__";

/// Separator between rankings in a translated classification.
pub const RANKING_DELIMITER: char = '|';

/// Principal classification ranks reported by `kraken-translate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Domain,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
    Subspecies,
}

impl Rank {
    /// All ranks, from broadest to narrowest.
    pub const ALL: [Rank; 8] = [
        Rank::Domain,
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
        Rank::Subspecies,
    ];

    /// Number of principal ranks.
    pub const COUNT: usize = Self::ALL.len();

    /// Kraken label prefix for this rank (`d`, `p`, ..., `s1`).
    pub fn label(self) -> &'static str {
        match self {
            Rank::Domain => "d",
            Rank::Phylum => "p",
            Rank::Class => "c",
            Rank::Order => "o",
            Rank::Family => "f",
            Rank::Genus => "g",
            Rank::Species => "s",
            Rank::Subspecies => "s1",
        }
    }

    /// Row name used in rarefaction output.
    pub fn row_name(self) -> &'static str {
        match self {
            Rank::Domain => "domains",
            Rank::Phylum => "phylums",
            Rank::Class => "classes",
            Rank::Order => "orders",
            Rank::Family => "families",
            Rank::Genus => "genera",
            Rank::Species => "species",
            Rank::Subspecies => "subspecies",
        }
    }

    /// Position of this rank in [`Rank::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a rank by its Kraken label.
    pub fn from_label(label: &str) -> Option<Rank> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }

    /// Returns true when `ranking` is labelled with this rank.
    ///
    /// The label must be followed directly by [`KRAKEN_SEPARATOR`], so
    /// `s1__x` is a subspecies and never a species.
    pub fn matches(self, ranking: &str) -> bool {
        ranking
            .strip_prefix(self.label())
            .is_some_and(|rest| rest.starts_with(KRAKEN_SEPARATOR))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.row_name())
    }
}

/// One component of a translated classification, e.g. `g__Prevotella`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranking(String);

impl Ranking {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The principal rank of this ranking, if it carries one.
    pub fn rank(&self) -> Option<Rank> {
        Rank::ALL.into_iter().find(|rank| rank.matches(&self.0))
    }

    /// Taxon name without the rank label.
    pub fn name(&self) -> &str {
        match self.rank() {
            Some(rank) => &self.0[rank.label().len() + KRAKEN_SEPARATOR.len()..],
            None => &self.0,
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a `kraken-translate` classification into its rankings.
pub fn parse_classification(classification: &str) -> Vec<Ranking> {
    classification
        .trim()
        .split(RANKING_DELIMITER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Ranking::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_and_subspecies_do_not_overlap() {
        assert!(Rank::Species.matches("s__Prevotella_enoeca"));
        assert!(!Rank::Species.matches("s1__Escherichia_coli_K12"));
        assert!(Rank::Subspecies.matches("s1__Escherichia_coli_K12"));
        assert!(!Rank::Subspecies.matches("s__Prevotella_enoeca"));
    }

    #[test]
    fn label_without_separator_is_not_a_rank() {
        assert!(!Rank::Domain.matches("d_Bacteria"));
        assert!(!Rank::Domain.matches("domain"));
        assert_eq!(Ranking::new("root").rank(), None);
    }

    #[test]
    fn parses_translated_classification() {
        let rankings = parse_classification("d__Bacteria|p__Bacteroidetes|g__Prevotella|s__Prevotella_enoeca\n");
        let ranks: Vec<_> = rankings.iter().map(Ranking::rank).collect();
        assert_eq!(
            ranks,
            vec![
                Some(Rank::Domain),
                Some(Rank::Phylum),
                Some(Rank::Genus),
                Some(Rank::Species)
            ]
        );
        assert_eq!(rankings[3].name(), "Prevotella_enoeca");
    }

    #[test]
    fn labels_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_label(rank.label()), Some(rank));
            assert_eq!(Rank::ALL[rank.index()], rank);
        }
        assert_eq!(Rank::from_label("k"), None);
    }
}
