//! Application layer - use cases and orchestration.
//!
//! This layer contains the main business logic for keeping, filtering
//! and synchronizing the quote collection.

pub mod category;
pub mod formatter;
pub mod notifier;
pub mod quote_store;
pub mod sync_service;
pub mod transfer;

pub use category::{categories_of, filter_by_category};
pub use formatter::{
    format_categories, format_empty_category, format_notice, format_quote, format_quotes_json,
    format_quotes_table, format_stats, OutputFormat,
};
pub use notifier::{Notifier, NOTICE_TTL};
pub use quote_store::QuoteStore;
pub use sync_service::{merge, spawn_sync_loop, MergeResult, SyncHandle, SyncService};
pub use transfer::{export_string, export_to_file, import_from_file, parse_import};
