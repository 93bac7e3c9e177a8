//! End-to-end assembly statistics: FASTA on disk -> stats -> CSV report

use biopipeline_rust::{load_fasta, AssemblyStats, PipelineError};
use polars::prelude::*;
use std::io::Write;
use std::path::Path;

fn write_fasta(dir: &Path, name: &str, contigs: &[(&str, String)]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for (id, seq) in contigs {
        writeln!(file, ">{id}").unwrap();
        writeln!(file, "{seq}").unwrap();
    }
    path
}

#[test]
fn test_fasta_to_stats_report() {
    let dir = tempfile::tempdir().unwrap();

    // 1000 + 2000 + 7000 bp, all 'AT' repeats except one GC-rich contig.
    let fasta = write_fasta(
        dir.path(),
        "assembly.fasta",
        &[
            ("contig_1", "AT".repeat(500)),
            ("contig_2", "GC".repeat(1000)),
            ("contig_3", "AT".repeat(3500)),
        ],
    );

    let records = load_fasta(&fasta).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "contig_1");

    let stats = AssemblyStats::new("assembly.fasta", records).unwrap();
    let basic = stats.basic_stats();

    assert_eq!(basic.total_length, 10_000);
    assert_eq!(basic.n50, 7000);
    assert_eq!(basic.n90, 2000);
    // 2000 GC bases of 10000 total.
    assert_eq!(basic.gc_percent, 20.0);
    assert_eq!(basic.longest_contig, 7000);
    assert_eq!(basic.shortest_contig, 1000);
    assert_eq!(basic.median_length, 2000);

    // Round-trip the report through CSV.
    let report_path = dir.path().join("assembly_stats.csv");
    stats.write_report(&report_path).unwrap();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(report_path))
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(df.height(), 1);
    let n50 = df.column("n50").unwrap().i64().unwrap().get(0).unwrap();
    assert_eq!(n50, 7000);
    let n90 = df.column("n90").unwrap().i64().unwrap().get(0).unwrap();
    assert_eq!(n90, 2000);
}

#[test]
fn test_missing_fasta_is_input_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_fasta(&dir.path().join("absent.fasta")).unwrap_err();
    assert!(matches!(err, PipelineError::InputNotFound { .. }));
}

#[test]
fn test_empty_fasta_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.fasta");
    std::fs::File::create(&path).unwrap();

    let records = load_fasta(&path).unwrap();
    assert!(records.is_empty());
    let err = AssemblyStats::new("empty.fasta", records).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyInput));
}
