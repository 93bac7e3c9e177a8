//! Batch QC across multiple genome assemblies
//!
//! Analyzes every FASTA file given on the command line in parallel and
//! writes one comparative summary CSV. Each genome is independent, so
//! the runs share nothing and Rayon fans them out safely.
//!
//! Usage: batch_analysis <genome.fasta>... [--output <dir>]

use anyhow::{Context, Result};
use biopipeline_rust::{load_fasta, quality_tier, AssemblyStats, BasicStats};
use polars::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut output_dir = PathBuf::from("batch_results");
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--output" || arg == "-o" {
            let dir = iter.next().context("--output requires a directory")?;
            output_dir = PathBuf::from(dir);
        } else {
            inputs.push(PathBuf::from(arg));
        }
    }

    if inputs.is_empty() {
        eprintln!("Usage: batch_analysis <genome.fasta>... [--output <dir>]");
        std::process::exit(1);
    }

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    println!("\nBatch analysis: {} genomes", inputs.len());

    let results: Vec<(PathBuf, Result<BasicStats>)> = inputs
        .par_iter()
        .map(|path| (path.clone(), analyze_one(path)))
        .collect();

    let mut successful: Vec<BasicStats> = Vec::new();
    for (path, result) in &results {
        match result {
            Ok(stats) => {
                println!(
                    "  {:<30} N50 {:>9} bp | GC {:>5.1}% | {}",
                    stats.genome_file,
                    stats.n50,
                    stats.gc_percent,
                    quality_tier(stats.n50)
                );
                successful.push(stats.clone());
            }
            Err(err) => println!("  {:<30} FAILED: {err:#}", path.display()),
        }
    }

    if successful.is_empty() {
        anyhow::bail!("no genome analyzed successfully");
    }

    let summary_csv = output_dir.join("comparative_summary.csv");
    write_comparative_summary(&successful, &summary_csv)?;
    println!(
        "\n{}/{} genomes analyzed; summary saved: {}",
        successful.len(),
        inputs.len(),
        summary_csv.display()
    );

    Ok(())
}

fn analyze_one(path: &Path) -> Result<BasicStats> {
    let records = load_fasta(path)?;
    let label = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("genome.fasta");
    let stats = AssemblyStats::new(label, records)?;
    Ok(stats.basic_stats())
}

fn write_comparative_summary(stats: &[BasicStats], path: &Path) -> Result<()> {
    let genomes: Vec<&str> = stats.iter().map(|s| s.genome_file.as_str()).collect();
    let sequences: Vec<i64> = stats.iter().map(|s| s.total_sequences as i64).collect();
    let lengths: Vec<i64> = stats.iter().map(|s| s.total_length as i64).collect();
    let n50s: Vec<i64> = stats.iter().map(|s| s.n50 as i64).collect();
    let gcs: Vec<f64> = stats.iter().map(|s| s.gc_percent).collect();
    let tiers: Vec<&str> = stats.iter().map(|s| quality_tier(s.n50)).collect();

    let mut df = df!(
        "genome" => genomes,
        "total_sequences" => sequences,
        "total_length" => lengths,
        "n50" => n50s,
        "gc_percent" => gcs,
        "quality" => tiers,
    )?;

    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}
