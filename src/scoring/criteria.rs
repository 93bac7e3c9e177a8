//! Per-criterion scoring functions
//!
//! Each function is pure, deterministic and [0,1]-valued. The piecewise
//! boundaries and the two sequence heuristics (literal G/C counting on
//! protein sequences, the fixed 5-in-a-row repeat check) are kept
//! exactly as the established scoring scheme defines them; changing
//! them would silently change every ranking downstream.

use rustc_hash::FxHashMap;

/// Keywords suggesting a secreted product
const POSITIVE_SIGNAL_KEYWORDS: [&str; 6] = [
    "signal",
    "secreted",
    "extracellular",
    "exported",
    "precursor",
    "preprotein",
];

/// Keywords suggesting the product stays inside the cell
const NEGATIVE_SIGNAL_KEYWORDS: [&str; 3] = ["intracellular", "cytoplasmic", "membrane"];

/// Sequences shorter than this get neutral composition scores
const MIN_SEQUENCE_LEN: usize = 50;

/// Canonical amino-acid alphabet size, the diversity denominator
const AMINO_ACID_ALPHABET: f64 = 20.0;

/// Step score for protein length in amino acids
///
/// Optimal 250-600, degrading in bands on both sides. Boundary
/// membership matters: 250 and 600 are optimal, 249 and 601 are not.
pub fn score_length(length: u64) -> f64 {
    match length {
        250..=600 => 1.0,
        200..=249 | 601..=700 => 0.8,
        150..=199 | 701..=800 => 0.6,
        100..=149 | 801..=1000 => 0.4,
        _ => 0.2,
    }
}

/// Signal-peptide likelihood from the product description
///
/// Positive keywords are tested first, so a description matching both
/// sets counts as positive. Neither set matching is the uncertain 0.5.
pub fn score_signal_peptide(product: &str) -> f64 {
    let product_lower = product.to_lowercase();

    if POSITIVE_SIGNAL_KEYWORDS
        .iter()
        .any(|kw| product_lower.contains(kw))
    {
        1.0
    } else if NEGATIVE_SIGNAL_KEYWORDS
        .iter()
        .any(|kw| product_lower.contains(kw))
    {
        0.0
    } else {
        0.5
    }
}

/// Completeness of the EC classification
///
/// Scored by the number of dot-separated numeric components: a full
/// 4-part code is 1.0, partial codes score less. An absent value or a
/// string whose components are not all numeric is treated as absent
/// (0.0) rather than an error — the scorer never aborts over one
/// malformed field.
pub fn score_ec_number(ec_number: Option<&str>) -> f64 {
    let Some(ec) = ec_number else {
        return 0.0;
    };
    let ec = ec.trim();
    if ec.is_empty() || ec == "N/A" {
        return 0.0;
    }

    let parts: Vec<&str> = ec.split('.').collect();
    if !parts.iter().all(|p| p.parse::<u32>().is_ok()) {
        return 0.0;
    }

    match parts.len() {
        n if n >= 4 => 1.0,
        3 => 0.7,
        2 => 0.4,
        _ => 0.0,
    }
}

/// Priority of the candidate's enzyme family
///
/// Unknown families score the 0.5 default rather than failing.
pub fn score_family_priority(family: &str, priorities: &FxHashMap<String, f64>) -> f64 {
    priorities.get(family).copied().unwrap_or(0.5)
}

/// Expression-friendliness proxy from literal G/C characters
///
/// Counts the literal 'G' and 'C' symbols of the supplied residue
/// string, even for amino-acid sequences. Not biological GC content,
/// but it is what the established scoring scheme computes, so it stays.
/// Short sequences (<50 residues) score a neutral 0.5.
pub fn score_gc_content(sequence: &str) -> f64 {
    if sequence.len() < MIN_SEQUENCE_LEN {
        return 0.5;
    }

    let gc_count = sequence.bytes().filter(|&b| b == b'G' || b == b'C').count();
    let gc_percent = (gc_count as f64 / sequence.len() as f64) * 100.0;

    if (40.0..=60.0).contains(&gc_percent) {
        1.0
    } else if (35.0..40.0).contains(&gc_percent) || (60.0 < gc_percent && gc_percent <= 65.0) {
        0.8
    } else if (30.0..35.0).contains(&gc_percent) || (65.0 < gc_percent && gc_percent <= 70.0) {
        0.6
    } else {
        0.4
    }
}

/// Sequence complexity via residue diversity and a repeat check
///
/// Diversity is distinct residues over the 20-letter alphabet. The
/// repeat check looks for a run of 5 consecutive identical symbols for
/// each distinct symbol present; any hit caps the score at 0.3. This is
/// a cheap proxy, not a general low-complexity detector, and is kept as
/// defined. Short sequences (<50 residues) score a neutral 0.5.
pub fn score_complexity(sequence: &str) -> f64 {
    if sequence.len() < MIN_SEQUENCE_LEN {
        return 0.5;
    }

    let bytes = sequence.as_bytes();
    let distinct: Vec<u8> = {
        let mut seen = [false; 256];
        let mut out = Vec::new();
        for &b in bytes {
            if !seen[b as usize] {
                seen[b as usize] = true;
                out.push(b);
            }
        }
        out
    };

    let has_repeat = distinct.iter().any(|&symbol| {
        let run = [symbol; 5];
        bytes.windows(5).any(|w| w == run)
    });
    if has_repeat {
        return 0.3;
    }

    let diversity = distinct.len() as f64 / AMINO_ACID_ALPHABET;
    if diversity > 0.7 {
        1.0
    } else if diversity > 0.5 {
        0.7
    } else {
        0.5
    }
}
