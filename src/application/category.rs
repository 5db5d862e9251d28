//! Category derivation and filtering.
//!
//! Categories are free-text labels, not a structured taxonomy. Matching is
//! exact and case-sensitive; `"all"` is the sentinel that disables the
//! filter entirely.

use std::collections::BTreeSet;

use crate::domain::{Quote, ALL_CATEGORIES};

/// Distinct categories present in the collection.
///
/// Set semantics; the sorted order is for stable output only.
#[must_use]
pub fn categories_of(quotes: &[Quote]) -> BTreeSet<String> {
    quotes.iter().map(|q| q.category.clone()).collect()
}

/// All quotes whose category equals `category` exactly.
///
/// No trimming, no case folding. `"all"` returns the full sequence.
#[must_use]
pub fn filter_by_category<'a>(quotes: &'a [Quote], category: &str) -> Vec<&'a Quote> {
    if category == ALL_CATEGORIES {
        return quotes.iter().collect();
    }
    quotes.iter().filter(|q| q.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("Believe in yourself.", "Motivation"),
            Quote::new("Stay curious.", "Learning"),
            Quote::new("Read widely.", "Learning"),
        ]
    }

    #[test]
    fn test_categories_are_distinct() {
        let cats = categories_of(&sample());
        assert_eq!(cats.len(), 2);
        assert!(cats.contains("Learning"));
        assert!(cats.contains("Motivation"));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let quotes = sample();
        let filtered = filter_by_category(&quotes, ALL_CATEGORIES);
        assert_eq!(filtered.len(), quotes.len());
        for (original, kept) in quotes.iter().zip(filtered) {
            assert_eq!(original, kept);
        }
    }

    #[test]
    fn test_filter_is_exact_match() {
        let quotes = sample();
        assert_eq!(filter_by_category(&quotes, "Learning").len(), 2);
        // Case-sensitive, no trimming
        assert!(filter_by_category(&quotes, "learning").is_empty());
        assert!(filter_by_category(&quotes, " Learning").is_empty());
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_by_category(&sample(), "Cooking").is_empty());
    }
}
