//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (DB, IO, etc.).

pub mod error;
pub mod models;
pub mod notice;
pub mod sync;

pub use error::{AppError, Result};
pub use models::{default_quotes, Quote, ALL_CATEGORIES, SERVER_CATEGORY};
pub use notice::{Notice, Severity};
pub use sync::{AppConfig, PathConfig, PushOutcome, SyncConfig, SyncOutcome, SyncReport};
