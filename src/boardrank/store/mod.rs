//! # Storage Layer
//!
//! This module defines the storage abstraction for boardrank. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All records of a scope live in one `data.json` map keyed by UUID
//!   - Ranks are persisted as plain strings and never parsed on load
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Project`: Local `.boardrank/` directory in the current directory
//! - `Scope::Global`: User-wide storage (`~/.local/share/boardrank/`)
//!
//! ## Storage Format
//!
//! ```text
//! .boardrank/
//! ├── data.json           # Every board, list and card in this scope
//! └── config.json         # Scope configuration
//! ```
//!
//! The store does not coordinate concurrent writers. Two processes inserting
//! at the same spot may persist equal ranks; `doctor` repairs those groups.

use crate::error::Result;
use crate::model::{Record, Scope};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Save a record (create or update)
    fn save_record(&mut self, record: &Record, scope: Scope) -> Result<()>;

    /// Save many records at once, e.g. a whole respaced sibling group
    fn save_records(&mut self, records: &[Record], scope: Scope) -> Result<()> {
        for record in records {
            self.save_record(record, scope)?;
        }
        Ok(())
    }

    fn get_record(&self, id: &Uuid, scope: Scope) -> Result<Record>;

    /// List all records in a given scope, in no particular order
    fn list_records(&self, scope: Scope) -> Result<Vec<Record>>;

    /// Delete a record permanently. Children are the caller's concern.
    fn delete_record(&mut self, id: &Uuid, scope: Scope) -> Result<()>;
}
