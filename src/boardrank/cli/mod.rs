//! # CLI Behavior
//!
//! One possible UI client for boardrank. The CLI is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `boardrank` with no arguments lists everything in scope.
//!
//! ## Create
//!
//! `boardrank create Roadmap` adds a board. When the first word is a path and
//! more words follow, it names the parent: `boardrank create 1 Todo` adds a
//! list to board 1, `boardrank create 1.1 Write docs` a card to list 1.1.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Output formatting (tree listing, keys, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
