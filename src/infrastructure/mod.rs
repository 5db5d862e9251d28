//! Infrastructure layer - external adapters (database, filesystem, network).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod kv_store;
pub mod remote;

pub use config::{ensure_config_exists, load_config, save_config};
pub use kv_store::{
    DurableStore, SessionStore, KEY_LAST_VIEWED, KEY_QUOTES, KEY_SELECTED_CATEGORY,
};
pub use remote::RemoteClient;
