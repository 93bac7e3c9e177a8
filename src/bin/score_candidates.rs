//! Score and rank an enzyme-candidate catalog
//!
//! Loads a candidate catalog CSV, scores every row against the six
//! criteria, then writes the scored table, the top-N FASTA export and
//! the one-row summary report.
//!
//! Usage: score_candidates <catalog.csv> [top_n] [output_dir] [weights.json]

use anyhow::{Context, Result};
use biopipeline_rust::scoring::write_scored_csv;
use biopipeline_rust::{
    generate_summary_report, load_catalog, CandidateScorer, ScoringWeights,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: score_candidates <catalog.csv> [top_n] [output_dir] [weights.json]");
        std::process::exit(1);
    }

    let catalog_path = PathBuf::from(&args[1]);
    let top_n: usize = args
        .get(2)
        .map(|v| v.parse())
        .transpose()
        .context("top_n must be an integer")?
        .unwrap_or(50);
    let output_dir = PathBuf::from(args.get(3).map(String::as_str).unwrap_or("scoring_results"));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    let custom_weights = match args.get(4) {
        Some(path) => {
            let weights = ScoringWeights::load(PathBuf::from(path).as_path())
                .with_context(|| format!("Failed to load weights: {path}"))?;
            let sum = weights.sum();
            if (sum - 1.0).abs() > 1e-9 {
                println!("Warning: weights sum to {sum}, totals may leave [0,100]");
            }
            Some(weights)
        }
        None => None,
    };

    println!("\nScoring candidates: {}", catalog_path.display());
    let catalog = load_catalog(&catalog_path)?;
    println!("  Candidates: {}", catalog.height());

    let scorer = CandidateScorer::new();
    let scored = scorer.score_catalog(&catalog, custom_weights.as_ref())?;

    let base_name = catalog_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog")
        .to_string();

    let scored_csv = output_dir.join(format!("{base_name}_scored.csv"));
    write_scored_csv(&scored, &scored_csv)?;
    println!("Scored catalog saved: {}", scored_csv.display());

    println!("\nTop {} candidates:", top_n.min(scored.len()));
    for candidate in scored.iter().take(top_n.min(10)) {
        println!(
            "  {:>3}. {:<20} {:<12} len {:>5}  score {:.1}",
            candidate.rank,
            candidate.record.locus_tag,
            candidate.record.family,
            candidate.record.length,
            candidate.total_score
        );
    }

    let fasta_path = output_dir.join(format!("top{top_n}_candidates.fasta"));
    scorer.export_top_candidates(&scored, top_n, &fasta_path)?;
    println!("\nTop {} export saved: {}", top_n, fasta_path.display());

    let summary_csv = output_dir.join("scoring_summary.csv");
    let summary = generate_summary_report(&scored, &summary_csv)?;
    println!("Summary saved: {}", summary_csv.display());
    println!(
        "  {} candidates | mean {:.1} | median {:.1} | top family: {}",
        summary.total_enzymes, summary.mean_score, summary.median_score, summary.top_family
    );

    Ok(())
}
