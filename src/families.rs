//! Enzyme family catalog
//!
//! Fixed catalog of the eight industrially interesting enzyme families,
//! with the product-description keywords used to assign a family and the
//! priority each family carries in scoring. Classification is keyword
//! matching over free-text annotation, not sequence analysis.

use rustc_hash::FxHashMap;

/// Family names in catalog order (also the priority order, highest first)
pub const FAMILY_NAMES: [&str; 8] = [
    "Lipases",
    "Proteases",
    "Cellulases",
    "Laccases",
    "Amylases",
    "Peroxydases",
    "Xylanases",
    "Chitinases",
];

/// Classification keywords per family, matched case-insensitively
/// against the product description
const FAMILY_KEYWORDS: [(&str, &[&str]); 8] = [
    ("Lipases", &["lipase", "esterase"]),
    ("Proteases", &["protease", "peptidase"]),
    ("Cellulases", &["cellulase", "glucosidase"]),
    ("Laccases", &["laccase", "oxidoreductase"]),
    ("Amylases", &["amylase"]),
    ("Peroxydases", &["peroxidase"]),
    ("Xylanases", &["xylanase"]),
    ("Chitinases", &["chitinase"]),
];

/// Score a product description against the family catalog
///
/// Returns the first family whose keyword list matches, in catalog
/// order; `None` when the product matches no family.
pub fn classify_product(product: &str) -> Option<&'static str> {
    let product_lower = product.to_lowercase();
    FAMILY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| product_lower.contains(kw)))
        .map(|(family, _)| *family)
}

/// Default family-priority table used by the scorer
///
/// Unknown families fall back to 0.5 at lookup time; the table itself
/// holds only the catalog families.
pub fn default_priorities() -> FxHashMap<String, f64> {
    let priorities = [
        ("Lipases", 1.0),
        ("Proteases", 0.9),
        ("Cellulases", 0.8),
        ("Laccases", 0.7),
        ("Amylases", 0.6),
        ("Peroxydases", 0.5),
        ("Xylanases", 0.4),
        ("Chitinases", 0.3),
    ];
    priorities
        .into_iter()
        .map(|(name, priority)| (name.to_string(), priority))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_keywords() {
        assert_eq!(classify_product("Triacylglycerol lipase"), Some("Lipases"));
        assert_eq!(classify_product("serine PROTEASE precursor"), Some("Proteases"));
        assert_eq!(classify_product("endo-1,4-beta-xylanase"), Some("Xylanases"));
    }

    #[test]
    fn test_classify_unmatched_product() {
        assert_eq!(classify_product("hypothetical protein"), None);
    }

    #[test]
    fn test_catalog_order_breaks_keyword_overlap() {
        // "lipase/esterase family protein" matches Lipases before anything else
        assert_eq!(
            classify_product("lipase/esterase family protein"),
            Some("Lipases")
        );
    }

    #[test]
    fn test_default_priorities_cover_catalog() {
        let priorities = default_priorities();
        for family in FAMILY_NAMES {
            assert!(priorities.contains_key(family), "missing {family}");
        }
        assert_eq!(priorities["Lipases"], 1.0);
        assert_eq!(priorities["Chitinases"], 0.3);
    }
}
