//! The in-memory quote collection and its persistence.
//!
//! The store owns the ordered sequence of quotes and the selected category
//! filter, writing both through the durable key-value adapter after every
//! mutation. The collection only ever grows: there is no removal operation.

use rand::Rng;

use crate::domain::{default_quotes, AppConfig, Quote, Result, ALL_CATEGORIES};
use crate::infrastructure::{
    DurableStore, SessionStore, KEY_LAST_VIEWED, KEY_QUOTES, KEY_SELECTED_CATEGORY,
};

use super::category::filter_by_category;

/// Source of truth for the quote collection during a session.
pub struct QuoteStore {
    durable: DurableStore,
    session: SessionStore,
    quotes: Vec<Quote>,
    selected_category: String,
}

impl QuoteStore {
    /// Open the store backed by the configured database path.
    ///
    /// # Errors
    /// Returns error if the durable store cannot be opened.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let durable = DurableStore::open(&config.store_db_path())?;
        Self::with_store(durable)
    }

    /// Build the store on top of an already-open durable adapter.
    ///
    /// Loads the persisted snapshot, falling back to the built-in seed when
    /// the snapshot is absent or unparsable. The fallback is persisted
    /// immediately; a parse failure is logged but never propagated.
    ///
    /// # Errors
    /// Returns error only on storage read/write failures.
    pub fn with_store(durable: DurableStore) -> Result<Self> {
        let quotes = match durable.get(KEY_QUOTES)? {
            Some(raw) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(quotes) => quotes,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored quotes unparsable, reseeding defaults");
                    seed(&durable)?
                }
            },
            None => seed(&durable)?,
        };

        let selected_category = durable
            .get(KEY_SELECTED_CATEGORY)?
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());

        Ok(Self {
            durable,
            session: SessionStore::new(),
            quotes,
            selected_category,
        })
    }

    /// The full collection in insertion order.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append one quote and persist the snapshot.
    ///
    /// The caller is responsible for validation; the store accepts the
    /// quote as-is.
    ///
    /// # Errors
    /// Returns error if the snapshot cannot be written.
    pub fn append(&mut self, quote: Quote) -> Result<()> {
        self.quotes.push(quote);
        self.save()
    }

    /// Append a batch of quotes and persist the snapshot once.
    ///
    /// No deduplication happens here: imports accept duplicates as-is and
    /// the merge path filters before calling.
    ///
    /// # Errors
    /// Returns error if the snapshot cannot be written.
    pub fn append_many(&mut self, quotes: Vec<Quote>) -> Result<()> {
        if quotes.is_empty() {
            return Ok(());
        }
        self.quotes.extend(quotes);
        self.save()
    }

    /// Serialize the full sequence and overwrite the persisted snapshot.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.quotes).map_err(crate::domain::AppError::json_parse)?;
        self.durable.set(KEY_QUOTES, &raw)
    }

    /// The persisted category filter, `"all"` when never set.
    #[must_use]
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Set and persist the category filter.
    ///
    /// # Errors
    /// Returns error if the write fails.
    pub fn set_selected_category(&mut self, category: &str) -> Result<()> {
        self.selected_category = category.to_string();
        self.durable.set(KEY_SELECTED_CATEGORY, category)
    }

    /// Pick a uniformly random quote from the pool matching `category`.
    ///
    /// A successful pick is recorded in the session store as the
    /// last-viewed quote. Returns `None` when no quote matches, so callers
    /// can show an explicit empty-result message.
    pub fn random_quote(&mut self, category: &str) -> Option<Quote> {
        let pool = filter_by_category(&self.quotes, category);
        if pool.is_empty() {
            return None;
        }

        let idx = rand::rng().random_range(0..pool.len());
        let quote = pool[idx].clone();

        if let Ok(raw) = serde_json::to_string(&quote) {
            self.session.set(KEY_LAST_VIEWED, raw);
        }

        Some(quote)
    }

    /// The last quote shown this session, as persisted JSON.
    #[must_use]
    pub fn last_viewed(&self) -> Option<&str> {
        self.session.get(KEY_LAST_VIEWED)
    }
}

fn seed(durable: &DurableStore) -> Result<Vec<Quote>> {
    let quotes = default_quotes();
    let raw = serde_json::to_string(&quotes).map_err(crate::domain::AppError::json_parse)?;
    durable.set(KEY_QUOTES, &raw)?;
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_memory_store() -> QuoteStore {
        let durable = DurableStore::open_in_memory().unwrap();
        QuoteStore::with_store(durable).unwrap()
    }

    #[test]
    fn test_missing_snapshot_seeds_and_persists_defaults() {
        let durable = DurableStore::open_in_memory().unwrap();
        assert_eq!(durable.get(KEY_QUOTES).unwrap(), None);

        let store = QuoteStore::with_store(durable).unwrap();
        assert_eq!(store.len(), 3);
        // Seed must be written back immediately
        assert!(store.durable.get(KEY_QUOTES).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_defaults() {
        let durable = DurableStore::open_in_memory().unwrap();
        durable.set(KEY_QUOTES, "{not json").unwrap();

        let store = QuoteStore::with_store(durable).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.quotes()[0], Quote::new("Believe in yourself.", "Motivation"));
    }

    #[test]
    fn test_append_lands_at_the_end_and_persists() {
        let mut store = open_memory_store();
        store.append(Quote::new("Ship it.", "Engineering")).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.quotes().last().unwrap().text, "Ship it.");

        let raw = store.durable.get(KEY_QUOTES).unwrap().unwrap();
        let persisted: Vec<Quote> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.quotes());
    }

    #[test]
    fn test_append_many_accepts_duplicates() {
        let mut store = open_memory_store();
        let dupe = store.quotes()[0].clone();
        store.append_many(vec![dupe.clone(), dupe]).unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_collection_survives_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("quotes.db");

        {
            let durable = DurableStore::open(&db_path).unwrap();
            let mut store = QuoteStore::with_store(durable).unwrap();
            store.append(Quote::new("Ship it.", "Engineering")).unwrap();
            store.set_selected_category("Engineering").unwrap();
        }

        let durable = DurableStore::open(&db_path).unwrap();
        let store = QuoteStore::with_store(durable).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.selected_category(), "Engineering");
    }

    #[test]
    fn test_random_quote_from_empty_category_is_none() {
        let mut store = open_memory_store();
        assert_eq!(store.random_quote("Nonexistent"), None);
        assert_eq!(store.last_viewed(), None);
    }

    #[test]
    fn test_random_quote_records_last_viewed() {
        let mut store = open_memory_store();
        let quote = store.random_quote("Learning").unwrap();
        assert_eq!(quote.category, "Learning");

        let raw = store.last_viewed().unwrap();
        let viewed: Quote = serde_json::from_str(raw).unwrap();
        assert_eq!(viewed, quote);
    }

    #[test]
    fn test_random_quote_all_draws_from_whole_pool() {
        let mut store = open_memory_store();
        let quote = store.random_quote(ALL_CATEGORIES).unwrap();
        assert!(store.quotes().contains(&quote));
    }
}
