//! # Boardrank Architecture
//!
//! Boardrank keeps Kanban boards, lists and cards in a user-chosen order
//! without ever renumbering a whole column. Every record carries a rank key:
//! a short string over `0-9A-Za-z` whose plain byte order is the display
//! order. Dropping a card between two others only writes the dropped card.
//!
//! It is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (dotted paths, per-scope config)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Record operations built on the rank generator            │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rank Generator (rank/)          Storage Layer (store/)     │
//! │  - Pure key arithmetic           - DataStore trait          │
//! │  - No I/O, no state              - FileStore, InMemoryStore │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rank keys
//!
//! [`rank`] is self-contained and usable on its own: `key_between`,
//! `key_after`, `key_before` and `evenly_spaced_keys`. A key never ends in
//! `0`, so there is always room below it. See the module docs for the
//! bisection rule.
//!
//! ## Paths
//!
//! Users address records by dotted 1-based positions (`2.1.3` is the third
//! card of the first list of the second board). Paths are recomputed from the
//! rank order on every call; the store only knows UUIDs. See [`index`].
//!
//! ## Testing Strategy
//!
//! 1. **Rank** (`rank/`): example tests plus `proptest` properties for the
//!    ordering guarantees.
//! 2. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`
//!    fixtures. Most of the testing lives here.
//! 3. **API** (`api.rs`): dispatch tests.
//! 4. **CLI** (`tests/`): end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`rank`]: The rank key generator
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `RecordKind`, `Scope`)
//! - [`index`]: Display paths
//! - [`config`]: Per-scope configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod rank;
pub mod store;
