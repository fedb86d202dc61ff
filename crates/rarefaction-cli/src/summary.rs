use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rarefaction_core::RunOutcome;
use rarefaction_model::{RarefactionTable, Rank};
use rarefaction_output::format_rate;

pub fn print_summary(outcome: &RunOutcome) {
    println!("Output: {}", outcome.output.display());
    println!("Seed: {}", outcome.seed);
    println!(
        "Reads: {} ({} classified)",
        outcome.stats.total_reads, outcome.stats.classified_reads
    );
    println!("{}", summary_table(&outcome.table));
}

/// One row per sample: rate, retained reads, then richness per rank.
pub fn summary_table(data: &RarefactionTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Rate"), header_cell("Reads")];
    header.extend(Rank::ALL.into_iter().map(|rank| header_cell(&capitalize(rank.row_name()))));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let deepest = data.len().saturating_sub(1);
    for (index, sample) in data.samples().iter().enumerate() {
        let mut row = vec![
            Cell::new(format_rate(sample.rate().value())).fg(Color::Blue),
            Cell::new(sample.reads()),
        ];
        row.extend(
            Rank::ALL
                .into_iter()
                .map(|rank| richness_cell(sample.richness(rank))),
        );
        if index == deepest {
            row = row
                .into_iter()
                .map(|cell| cell.add_attribute(Attribute::Bold))
                .collect();
        }
        table.add_row(row);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn richness_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_row_names() {
        assert_eq!(capitalize("phylums"), "Phylums");
        assert_eq!(capitalize(""), "");
    }
}
