//! Row-oriented rarefaction output.
//!
//! Each metric is one line: the row name followed by one value per sample.
//!
//! ```text
//! rates,0.5,1.0
//! reads,2,4
//! domains,1,2
//! ...
//! ```

use std::io::Write;

use csv::{Terminator, WriterBuilder};

use rarefaction_model::{RarefactionTable, Rank};

use crate::error::Result;

pub const RATES_ROW: &str = "rates";
pub const READS_ROW: &str = "reads";

/// Render a rate the way the row output has always shown it: the shortest
/// decimal that round-trips, always with a fractional part (`1.0`, not `1`).
/// Magnitudes below `1e-4` (or from `1e16`) switch to an exponent with a sign
/// and at least two digits (`5e-05`).
pub fn format_rate(rate: f64) -> String {
    let magnitude = rate.abs();
    if rate.is_finite() && rate != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let text = format!("{rate:e}");
        if let Some((mantissa, exponent)) = text.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
    }
    let text = rate.to_string();
    if text.contains('.') || text.contains("inf") || text.contains("NaN") {
        text
    } else {
        format!("{text}.0")
    }
}

/// Name and values of every output row, in file order.
pub fn table_rows(table: &RarefactionTable) -> Vec<(&'static str, Vec<String>)> {
    let mut rows = Vec::with_capacity(2 + Rank::COUNT);
    rows.push((
        RATES_ROW,
        table.rates().into_iter().map(format_rate).collect(),
    ));
    rows.push((
        READS_ROW,
        table.reads().iter().map(u64::to_string).collect(),
    ));
    for rank in Rank::ALL {
        rows.push((
            rank.row_name(),
            table.richness(rank).iter().map(usize::to_string).collect(),
        ));
    }
    rows
}

pub fn write_rows<W: Write>(table: &RarefactionTable, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for (name, values) in table_rows(table) {
        let mut record = Vec::with_capacity(values.len() + 1);
        record.push(name.to_string());
        record.extend(values);
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_keep_a_fractional_part() {
        assert_eq!(format_rate(1.0), "1.0");
        assert_eq!(format_rate(0.05), "0.05");
        assert_eq!(format_rate(0.150_000_000_000_000_02), "0.15000000000000002");
    }

    #[test]
    fn tiny_rates_use_an_exponent() {
        assert_eq!(format_rate(0.0001), "0.0001");
        assert_eq!(format_rate(0.000_05), "5e-05");
        assert_eq!(format_rate(0.000_015), "1.5e-05");
        assert_eq!(format_rate(2.5e-300), "2.5e-300");
        assert_eq!(format_rate(1e16), "1e+16");
    }

    #[test]
    fn empty_table_still_names_every_row() {
        let rows = table_rows(&RarefactionTable::default());
        let names: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "rates",
                "reads",
                "domains",
                "phylums",
                "classes",
                "orders",
                "families",
                "genera",
                "species",
                "subspecies"
            ]
        );
        assert!(rows.iter().all(|(_, values)| values.is_empty()));
    }
}
