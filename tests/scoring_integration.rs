//! End-to-end candidate scoring: catalog -> scores -> exports

use approx::assert_relative_eq;
use biopipeline_rust::scoring::{summarize, write_scored_csv};
use biopipeline_rust::{CandidateRecord, CandidateScorer, PipelineError};
use polars::prelude::*;

/// 36-residue unit: alternating G/C with 18 other distinct residues,
/// exactly 50% literal G/C, all 20 amino acids, no repeats
const BALANCED_UNIT: &str = "GACDGECFGHCIGKCLGMCNGPCQGRCSGTCVGWCY";

fn candidate(
    locus: &str,
    length: u64,
    product: &str,
    family: &str,
    ec: Option<&str>,
    sequence: String,
) -> CandidateRecord {
    CandidateRecord {
        locus_tag: locus.to_string(),
        product: product.to_string(),
        family: family.to_string(),
        length,
        sequence,
        ec_number: ec.map(String::from),
    }
}

#[test]
fn test_maximal_candidate_scores_exactly_100() {
    let scorer = CandidateScorer::new();
    let records = vec![candidate(
        "PERFECT_01",
        400,
        "extracellular lipase",
        "Lipases",
        Some("3.1.1.3"),
        BALANCED_UNIT.repeat(3),
    )];

    let scored = scorer.score_enzymes(&records, None);
    let top = &scored[0];

    assert_relative_eq!(top.score_length, 1.0);
    assert_relative_eq!(top.score_signal, 1.0);
    assert_relative_eq!(top.score_ec, 1.0);
    assert_relative_eq!(top.score_family, 1.0);
    assert_relative_eq!(top.score_gc, 1.0);
    assert_relative_eq!(top.score_complexity, 1.0);
    assert_relative_eq!(top.total_score, 100.0);
    assert_eq!(top.rank, 1);
}

#[test]
fn test_catalog_dataframe_to_ranked_table() {
    let df = df!(
        "locus_tag" => ["LOC_001", "LOC_002", "LOC_003"],
        "product" => ["cytoplasmic peptidase", "extracellular lipase", "chitinase"],
        "family" => ["Proteases", "Lipases", "Chitinases"],
        "length" => [90i64, 400, 300],
        "sequence" => [
            "MKQL".repeat(30),
            BALANCED_UNIT.repeat(3),
            "ACDEFGHIKLMN".repeat(10),
        ],
        "ec_number" => [None, Some("3.1.1.3"), Some("3.2")],
    )
    .unwrap();

    let scorer = CandidateScorer::new();
    let scored = scorer.score_catalog(&df, None).unwrap();

    assert_eq!(scored.len(), 3);
    assert_eq!(scored[0].record.locus_tag, "LOC_002");
    assert_relative_eq!(scored[0].total_score, 100.0);
    assert_eq!(scored[0].rank, 1);
    assert_eq!(scored[2].rank, 3);
    // Descending totals.
    assert!(scored[0].total_score >= scored[1].total_score);
    assert!(scored[1].total_score >= scored[2].total_score);
}

#[test]
fn test_catalog_missing_column_aborts() {
    let df = df!(
        "locus_tag" => ["LOC_001"],
        "family" => ["Lipases"],
        "length" => [400i64],
        "sequence" => ["MKLV"],
        "ec_number" => ["3.1.1.3"],
    )
    .unwrap();

    let err = CandidateScorer::new().score_catalog(&df, None).unwrap_err();
    match err {
        PipelineError::MissingColumn { column } => assert_eq!(column, "product"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_export_top_candidates_takes_first_three() {
    let dir = tempfile::tempdir().unwrap();
    let scorer = CandidateScorer::new();

    // Ten candidates with strictly decreasing length quality.
    let lengths = [400u64, 410, 420, 650, 660, 750, 760, 900, 1100, 1200];
    let records: Vec<CandidateRecord> = lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            candidate(
                &format!("LOC_{:03}", i + 1),
                len,
                "extracellular lipase",
                "Lipases",
                Some("3.1.1.3"),
                BALANCED_UNIT.repeat(3),
            )
        })
        .collect();

    let scored = scorer.score_enzymes(&records, None);
    let fasta_path = dir.path().join("top3.fasta");
    scorer.export_top_candidates(&scored, 3, &fasta_path).unwrap();

    let contents = std::fs::read_to_string(&fasta_path).unwrap();
    let headers: Vec<&str> = contents
        .lines()
        .filter(|line| line.starts_with('>'))
        .collect();

    assert_eq!(headers.len(), 3);
    for (i, header) in headers.iter().enumerate() {
        let expected = &scored[i];
        assert!(
            header.starts_with(&format!(">{}|Lipases|", expected.record.locus_tag)),
            "header {i}: {header}"
        );
        assert!(header.ends_with(&format!("rank_{}", i + 1)));
    }
    // Sequence line follows each header verbatim.
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], scored[0].record.sequence);
}

#[test]
fn test_scored_csv_and_summary_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let scorer = CandidateScorer::new();

    let records = vec![
        candidate(
            "LOC_001",
            400,
            "extracellular lipase",
            "Lipases",
            Some("3.1.1.3"),
            BALANCED_UNIT.repeat(3),
        ),
        candidate(
            "LOC_002",
            90,
            "cytoplasmic fragment",
            "Unknown",
            None,
            "MK".repeat(10),
        ),
    ];
    let scored = scorer.score_enzymes(&records, None);

    let csv_path = dir.path().join("scored.csv");
    write_scored_csv(&scored, &csv_path).unwrap();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path))
        .unwrap()
        .finish()
        .unwrap();
    assert_eq!(df.height(), 2);
    let ranks = df.column("rank").unwrap().i64().unwrap();
    assert_eq!(ranks.get(0), Some(1));
    assert_eq!(ranks.get(1), Some(2));

    let summary = summarize(&scored);
    assert_eq!(summary.total_enzymes, 2);
    assert_eq!(summary.excellent_candidates, 1);
    assert_eq!(summary.top_family, "Lipases");
    assert_relative_eq!(
        summary.mean_score,
        (scored[0].total_score + scored[1].total_score) / 2.0,
        epsilon = 1e-9
    );
}
