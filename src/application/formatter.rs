//! Output formatting for quotes, listings and notices.
//!
//! Supports plain text, JSON and table output.

use std::collections::{BTreeMap, BTreeSet};

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{Notice, Quote, Result, Severity, ALL_CATEGORIES};

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON format for programmatic use.
    Json,
    /// Compact table listing.
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown format: {s}. Use: text, json, table")),
        }
    }
}

/// Format a single quote for display.
#[must_use]
pub fn format_quote(quote: &Quote) -> String {
    format!(
        "{}\n  {} {}",
        format!("\"{}\"", quote.text).bold(),
        "Category:".dimmed(),
        quote.category
    )
}

/// Message shown when a category filter matches nothing.
#[must_use]
pub fn format_empty_category(category: &str) -> String {
    format!("No quotes for category '{category}'.")
}

/// Format quotes as a table.
#[must_use]
pub fn format_quotes_table(quotes: &[Quote]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Quote", "Category"]);

    for (i, quote) in quotes.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            quote.text.clone(),
            quote.category.clone(),
        ]);
    }

    table.to_string()
}

/// Format quotes as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_quotes_json(quotes: &[Quote]) -> Result<String> {
    crate::application::transfer::export_string(quotes)
}

/// Format the category listing with the `all` sentinel first.
#[must_use]
pub fn format_categories(categories: &BTreeSet<String>) -> String {
    let mut out = String::new();
    out.push_str(ALL_CATEGORIES);
    for category in categories {
        out.push('\n');
        out.push_str(category);
    }
    out
}

/// Format collection statistics: total plus per-category counts.
#[must_use]
pub fn format_stats(quotes: &[Quote]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for quote in quotes {
        *counts.entry(quote.category.as_str()).or_default() += 1;
    }

    let mut out = format!("Quotes: {}\nCategories: {}\n", quotes.len(), counts.len());
    for (category, count) in counts {
        out.push_str(&format!("  {category}: {count}\n"));
    }
    out
}

/// Format a notice with severity-appropriate coloring.
#[must_use]
pub fn format_notice(notice: &Notice) -> String {
    match notice.severity {
        Severity::Info => notice.message.blue().to_string(),
        Severity::Success => notice.message.green().to_string(),
        Severity::Warning => notice.message.yellow().to_string(),
        Severity::Error => notice.message.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::category::categories_of;

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("Believe in yourself.", "Motivation"),
            Quote::new("Stay curious.", "Learning"),
            Quote::new("Read widely.", "Learning"),
        ]
    }

    #[test]
    fn test_format_parses_known_values() {
        assert!(matches!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!("TABLE".parse::<OutputFormat>(), Ok(OutputFormat::Table)));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_quote_contains_text_and_category() {
        let out = format_quote(&Quote::new("Stay curious.", "Learning"));
        assert!(out.contains("Stay curious."));
        assert!(out.contains("Learning"));
    }

    #[test]
    fn test_table_lists_every_quote() {
        let out = format_quotes_table(&sample());
        assert!(out.contains("Believe in yourself."));
        assert!(out.contains("Read widely."));
    }

    #[test]
    fn test_categories_start_with_all_sentinel() {
        let out = format_categories(&categories_of(&sample()));
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("all"));
        assert_eq!(lines.next(), Some("Learning"));
        assert_eq!(lines.next(), Some("Motivation"));
    }

    #[test]
    fn test_stats_counts_per_category() {
        let out = format_stats(&sample());
        assert!(out.contains("Quotes: 3"));
        assert!(out.contains("Learning: 2"));
        assert!(out.contains("Motivation: 1"));
    }
}
