//! # Boardrank CLI
//!
//! The binary is thin: the CLI lives in `cli/` and this file only invokes
//! `cli::run()` and turns errors into an exit status.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring, logging setup and per-command handlers
//! - `cli/render.rs`: terminal output for listings, keys and messages
//!
//! Everything from `api.rs` inward is UI agnostic; see the library docs.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
