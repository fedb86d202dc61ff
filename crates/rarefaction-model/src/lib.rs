//! Data model for Kraken rarefaction.
//!
//! - [`Rank`] / [`Ranking`]: principal ranks and `kraken-translate` components
//! - [`SamplingRate`]: validated rate in `(0, 1]` and the schedule it induces
//! - [`Sample`]: reads and taxa retained at one rate
//! - [`RarefactionTable`]: all samples of a run

pub mod error;
pub mod rank;
pub mod rate;
pub mod sample;
pub mod table;

pub use error::{RarefactionError, Result};
pub use rank::{KRAKEN_SEPARATOR, RANKING_DELIMITER, Rank, Ranking, parse_classification};
pub use rate::{DEFAULT_RATE, MAX_SAMPLING_POINTS, SamplingRate};
pub use sample::Sample;
pub use table::RarefactionTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_serializes_lowercase() {
        let json = serde_json::to_string(&Rank::Subspecies).expect("serialize rank");
        assert_eq!(json, "\"subspecies\"");
        let round: Rank = serde_json::from_str("\"genus\"").expect("deserialize rank");
        assert_eq!(round, Rank::Genus);
    }

    #[test]
    fn rate_serializes_as_number() {
        let rate = SamplingRate::new(0.25).expect("valid rate");
        assert_eq!(serde_json::to_string(&rate).expect("serialize rate"), "0.25");
    }

    #[test]
    fn error_messages() {
        let err = SamplingRate::new(2.0).unwrap_err();
        assert_eq!(err.to_string(), "the rate is not in range (0, 1]: 2");

        let step = 1.0 / f64::from(1u32 << 20);
        let err = SamplingRate::new(step).unwrap().schedule().unwrap_err();
        assert_eq!(
            err.to_string(),
            "the rate 0.00000095367431640625 needs 1.048576e6 sampling points, \
             more than the limit of 100000"
        );
    }
}
