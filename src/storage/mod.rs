//! Local storage module
//!
//! This module handles persistent storage including:
//! - The key-value blob store the roster snapshot lives in
//! - The serialized roster snapshot format
//! - Application settings
//!
//! The module is organized into submodules:
//! - `kv` - Async key-value store trait
//! - `memory` - Process-local store (tests and ephemeral runs)
//! - `storage_db` - SQLite-backed store
//! - `snapshot` - Roster snapshot key and JSON encoding
//! - `settings` - Application settings and configuration

// Submodules
pub mod kv;
pub mod memory;
pub mod settings;
pub mod snapshot;
pub mod storage_db;

// Re-export commonly used types
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use settings::Settings;
pub use snapshot::ROSTER_KEY;
pub use storage_db::SqliteStore;
