/*!
# Vocalog

Vocalog is a multilingual voice diary: a user dictates or types entries, the
application stores them in a single local JSON slot, and a front end can list,
search, sort and speak them back with the language and voice each entry was
saved with. This crate is the persistence and query core plus a thin CLI;
speech capture, synthesis and translation are external collaborators that
hand the core plain text.

## Core Features

- Entry store with create/read/update/delete over a local collection
- Case-insensitive free-text search across titles and content
- Multi-key sorting (creation time, update time, language label, title, voice)
- Whole-diary JSON export and (destructive) import
- Pluggable persistence backend, file-backed by default

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `constants`: Centralized names, paths and defaults
- `entry`: The diary entry record and partial-update type
- `errors`: Error handling infrastructure
- `lang`: Language-region codes and display labels
- `query`: Stateless sorting over collection snapshots
- `store`: The entry store and its persistence backends
- `transfer`: Export serialization and import validation

## Usage Example

```rust
use vocalog::store::{DiaryStore, MemoryBackend};

fn main() -> vocalog::AppResult<()> {
    let mut store = DiaryStore::open(MemoryBackend::new())?;

    let entry = store.create(
        "Morning".to_string(),
        "Dictated over coffee".to_string(),
        "en-US".to_string(),
        None,
    )?;

    assert_eq!(store.search("coffee").len(), 1);
    store.delete(&entry.id)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// The diary entry record and partial updates
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Language-region codes and their display labels
pub mod lang;
/// Stateless query functions over entry snapshots
pub mod query;
/// The entry store and persistence backends
pub mod store;
/// Export and import serialization
pub mod transfer;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{Entry, EntryPatch};
pub use errors::{AppError, AppResult};
pub use lang::Language;
pub use query::SortKey;
pub use store::{DiaryStore, FileBackend, MemoryBackend, StorageBackend};
