//! Storage Adapters
//!
//! - `JsonFileStore`: one pretty-printed JSON file per key under a data directory
//! - `MemoryStore`: process-local map, used in tests and `--ephemeral` runs

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, DEFAULT_DATA_DIR};
pub use memory::MemoryStore;
