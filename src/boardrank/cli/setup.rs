use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "boardrank", bin_name = "boardrank", version = get_version())]
#[command(about = "Keep Kanban boards, lists and cards in order", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global store
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Log rank decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a board, list or card
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Optional parent path followed by the title words (e.g. `1.2 Fix login`)
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// List records in rank order
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show what is below this path
        parent: Option<String>,

        /// Levels to show below the parent
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Move a record to another position or parent
    #[command(alias = "mv", display_order = 3)]
    Move {
        /// Path of the record to move
        path: String,

        /// New parent (defaults to the current one)
        #[arg(long)]
        to: Option<String>,

        /// Put it first
        #[arg(long, conflicts_with_all = ["last", "at"])]
        first: bool,

        /// Put it last (the default)
        #[arg(long, conflicts_with = "at")]
        last: bool,

        /// Put it at this 1-based position
        #[arg(long)]
        at: Option<usize>,
    },

    /// Respace a group's ranks, optionally in a new order
    #[command(display_order = 4)]
    Reorder {
        /// Parent whose children are reordered (boards when omitted)
        parent: Option<String>,

        /// Current positions in their new order (e.g. `--order 3,1,2`)
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        order: Option<Vec<usize>>,
    },

    /// Import one record per line of a text file
    #[command(display_order = 5)]
    Import {
        /// File to read titles from
        file: PathBuf,

        /// Parent the records are added to (boards when omitted)
        #[arg(long)]
        into: Option<String>,
    },

    /// Delete records and everything under them
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Paths of the records (e.g. 1.2 3)
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Find and repair tied or malformed ranks
    #[command(display_order = 10)]
    Doctor,

    /// Generate rank keys directly
    #[command(display_order = 11)]
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },

    /// Get or set configuration
    #[command(display_order = 12)]
    Config {
        /// Configuration key (max-key-len, auto-rebalance)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store
    #[command(display_order = 13)]
    Init,
}

#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// A key strictly between two keys (`-` for an open side)
    Between {
        lower: Option<String>,
        upper: Option<String>,
    },

    /// A key after PREV (the first key when omitted)
    After { prev: Option<String> },

    /// A key before NEXT
    Before { next: String },

    /// COUNT evenly spaced keys
    Spaced { count: usize },
}
