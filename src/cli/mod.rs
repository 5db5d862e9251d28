//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use clap::{Parser, Subcommand};

use crate::application::OutputFormat;

/// Quotekeeper - keep, filter and sync a local quote collection.
#[derive(Parser, Debug)]
#[command(name = "quotekeeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format: text, json, or table.
    #[arg(short, long, default_value = "text")]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a random quote (uses the persisted category filter by default).
    Show {
        /// Category to draw from, overriding the persisted filter.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a quote to the collection and push it to the server.
    Add {
        /// The quote text.
        text: String,

        /// Category label for the quote.
        category: String,
    },

    /// Set the persisted category filter ("all" disables filtering).
    Filter {
        /// Category to filter by.
        category: String,
    },

    /// List the distinct categories in the collection.
    Categories,

    /// List quotes, optionally restricted to one category.
    List {
        /// Category to restrict to.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Import quotes from a JSON file (all-or-nothing).
    Import {
        /// Path to the JSON file.
        file: String,
    },

    /// Export the full collection as pretty-printed JSON.
    Export {
        /// Output file path (stdout if not specified).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Reconcile with the server once, or keep polling with --watch.
    Sync {
        /// Keep running, syncing on the configured interval until Ctrl-C.
        #[arg(short, long)]
        watch: bool,
    },

    /// Show statistics about the stored collection.
    Stats,

    /// Show data and config paths being used.
    Paths,
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }
}
