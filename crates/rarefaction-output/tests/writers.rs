//! Integration tests for the rarefaction writers.

use std::fs;

use rarefaction_model::{RarefactionTable, Sample, SamplingRate, parse_classification};
use rarefaction_output::{OutputFormat, write_table, write_table_to_path};
use tempfile::TempDir;

fn sample(rate: f64, reads: u64, classifications: &[&str]) -> Sample {
    let mut sample = Sample::new(SamplingRate::new(rate).unwrap());
    for _ in 0..reads {
        sample.count_read();
    }
    for classification in classifications {
        sample.observe(&parse_classification(classification));
    }
    sample
}

fn test_table() -> RarefactionTable {
    RarefactionTable::new(vec![
        sample(
            0.5,
            2,
            &["d__Bacteria|p__Firmicutes|c__Bacilli|o__Bacillales|f__Bacillaceae|g__Bacillus|s__Bacillus_subtilis"],
        ),
        sample(
            1.0,
            4,
            &[
                "d__Bacteria|p__Firmicutes|c__Bacilli|o__Bacillales|f__Bacillaceae|g__Bacillus|s__Bacillus_subtilis",
                "d__Bacteria|p__Proteobacteria|c__Gammaproteobacteria|o__Enterobacterales|f__Enterobacteriaceae|g__Escherichia|s__Escherichia_coli|s1__Escherichia_coli_K-12",
                "d__Archaea|p__Euryarchaeota",
            ],
        ),
    ])
}

fn render(format: OutputFormat) -> String {
    let mut buffer = Vec::new();
    write_table(&test_table(), format, &mut buffer).expect("write table");
    String::from_utf8(buffer).expect("utf8 output")
}

#[test]
fn rows_output_snapshot() {
    insta::assert_snapshot!(render(OutputFormat::Rows), @r"
    rates,0.5,1.0
    reads,2,4
    domains,1,2
    phylums,1,3
    classes,1,2
    orders,1,2
    families,1,2
    genera,1,2
    species,1,2
    subspecies,0,1
    ");
}

#[test]
fn rows_output_has_no_trailing_commas() {
    let text = render(OutputFormat::Rows);
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 10);
    assert!(text.lines().all(|line| !line.ends_with(',')));
}

#[test]
fn json_output_keeps_rank_order() {
    let value: serde_json::Value =
        serde_json::from_str(&render(OutputFormat::Json)).expect("valid json");

    assert_eq!(value["rates"], serde_json::json!([0.5, 1.0]));
    assert_eq!(value["reads"], serde_json::json!([2, 4]));
    let ranks = value["ranks"].as_array().expect("ranks array");
    assert_eq!(ranks.len(), 8);
    assert_eq!(ranks[0]["rank"], "domain");
    assert_eq!(ranks[1]["richness"], serde_json::json!([1, 3]));
    assert_eq!(ranks[7]["rank"], "subspecies");
    assert_eq!(ranks[7]["richness"], serde_json::json!([0, 1]));
}

#[test]
fn writes_to_path_and_truncates() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("rarefaction.csv");
    fs::write(&path, "stale contents that are much longer than the table output\n".repeat(50))
        .expect("seed file");

    write_table_to_path(&test_table(), OutputFormat::Rows, &path).expect("write file");

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("rates,0.5,1.0\nreads,2,4\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn missing_output_directory_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("missing").join("out.csv");

    let err = write_table_to_path(&test_table(), OutputFormat::Rows, &path).unwrap_err();

    assert!(err.to_string().starts_with("failed to create output file"));
}
