use std::io::Write;

use serde::Serialize;

use rarefaction_model::{RarefactionTable, Rank};

use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct JsonTable {
    pub rates: Vec<f64>,
    pub reads: Vec<u64>,
    pub ranks: Vec<JsonRank>,
}

#[derive(Debug, Serialize)]
pub struct JsonRank {
    pub rank: Rank,
    pub richness: Vec<usize>,
}

impl From<&RarefactionTable> for JsonTable {
    fn from(table: &RarefactionTable) -> Self {
        Self {
            rates: table.rates(),
            reads: table.reads(),
            ranks: Rank::ALL
                .into_iter()
                .map(|rank| JsonRank {
                    rank,
                    richness: table.richness(rank),
                })
                .collect(),
        }
    }
}

pub fn write_json<W: Write>(table: &RarefactionTable, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &JsonTable::from(table))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
