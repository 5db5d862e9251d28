//! Domain models for the quote collection.
//!
//! A quote is the atomic unit of content: a (text, category) pair with no
//! unique identifier. Two quotes are the same quote iff both fields match
//! exactly.

use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category assigned to quotes pulled from the remote source, which has no
/// native category concept.
pub const SERVER_CATEGORY: &str = "Server";

/// A single quote: free text plus a free-text category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub text: String,
    /// Category label, used purely for filtering.
    pub category: String,
}

impl Quote {
    /// Create a quote without validation.
    ///
    /// Used on paths where the fields are already known to be well-formed
    /// (deserialized snapshots, remote mapping). User input goes through
    /// [`Quote::validated`] instead.
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Create a quote from user input, trimming both fields and rejecting
    /// empty values.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if either field is empty after
    /// trimming.
    pub fn validated(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(AppError::validation("Quote text must not be empty"));
        }
        if category.is_empty() {
            return Err(AppError::validation("Quote category must not be empty"));
        }

        Ok(Self::new(text, category))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" ({})", self.text, self.category)
    }
}

/// The built-in seed collection, used when no snapshot exists or the
/// persisted snapshot cannot be parsed.
#[must_use]
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Believe in yourself.", "Motivation"),
        Quote::new("Stay curious.", "Learning"),
        Quote::new("Work smart, not just hard.", "Productivity"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_trims_fields() {
        let q = Quote::validated("  Stay curious.  ", " Learning ").unwrap();
        assert_eq!(q.text, "Stay curious.");
        assert_eq!(q.category, "Learning");
    }

    #[test]
    fn test_validated_rejects_empty_text() {
        assert!(Quote::validated("   ", "Learning").is_err());
    }

    #[test]
    fn test_validated_rejects_empty_category() {
        assert!(Quote::validated("Stay curious.", "").is_err());
    }

    #[test]
    fn test_identity_is_exact_pair_equality() {
        let a = Quote::new("Stay curious.", "Learning");
        let b = Quote::new("Stay curious.", "Learning");
        let c = Quote::new("Stay curious.", "learning");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_seed_has_three_quotes() {
        let seed = default_quotes();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].category, "Motivation");
    }
}
