//! Quality control for one assembled genome
//!
//! Loads a FASTA assembly, computes the summary statistics and writes
//! two CSV files into the output directory: the one-row stats report
//! and the per-contig GC table.
//!
//! Usage: analyze_genome <genome.fasta> [output_dir]

use anyhow::{Context, Result};
use biopipeline_rust::{load_fasta, quality_tier, AssemblyStats};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: analyze_genome <genome.fasta> [output_dir]");
        std::process::exit(1);
    }

    let fasta_path = PathBuf::from(&args[1]);
    let output_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    let genome_name = fasta_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("genome")
        .to_string();

    println!("\nAnalyzing assembly: {}", fasta_path.display());
    let records = load_fasta(&fasta_path)
        .with_context(|| format!("Failed to load FASTA: {}", fasta_path.display()))?;
    let file_label = fasta_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("genome.fasta");
    let stats = AssemblyStats::new(file_label, records)?;

    let basic = stats.basic_stats();
    println!("\nAssembly statistics - {}", basic.genome_file);
    println!("{}", "=".repeat(50));
    println!("Sequences       : {}", basic.total_sequences);
    println!("Total length    : {} bp", basic.total_length);
    println!("N50             : {} bp", basic.n50);
    println!("N90             : {} bp", basic.n90);
    println!("GC%             : {}%", basic.gc_percent);
    println!("Longest contig  : {} bp", basic.longest_contig);
    println!("Shortest contig : {} bp", basic.shortest_contig);
    println!("Mean length     : {} bp", basic.mean_length);
    println!("Median length   : {} bp", basic.median_length);
    println!("Quality tier    : {}", quality_tier(basic.n50));

    let stats_csv = output_dir.join(format!("{genome_name}_stats.csv"));
    stats.write_report(&stats_csv)?;
    println!("\nStats report saved: {}", stats_csv.display());

    let gc_csv = output_dir.join(format!("{genome_name}_gc_per_sequence.csv"));
    write_gc_table(&stats, &gc_csv)?;
    println!("Per-contig GC saved: {}", gc_csv.display());

    Ok(())
}

fn write_gc_table(stats: &AssemblyStats, path: &Path) -> Result<()> {
    use polars::prelude::*;

    let mut df = stats.gc_table()?;
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}
