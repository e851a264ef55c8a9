//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Nested, reorderable columns: inspect and reorder a board of groups
#[derive(Parser, Debug)]
#[command(name = "nestcol")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Board JSON file (default: config board_file, else the seed board)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub board: Option<PathBuf>,

    /// Print boards as JSON instead of a tree
    #[arg(long, global = true)]
    pub json: bool,

    /// Only search direct children of top-level columns when locating groups
    #[arg(long, global = true)]
    pub shallow: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    Show,

    /// Print the group that directly contains GROUP
    Parent {
        /// Group name
        group: String,
    },

    /// Print the entries of GROUP inside PARENT
    Entries {
        /// Containing group
        parent: String,
        /// Nested group
        group: String,
    },

    /// Move the entry at FROM to TO within GROUP
    MoveEntry {
        /// Group whose sequence is reordered (top-level or nested)
        group: String,
        /// Current position (zero-based)
        from: usize,
        /// Target position (zero-based)
        to: usize,
    },

    /// Move the top-level column at FROM to TO
    MoveColumn {
        /// Current position (zero-based)
        from: usize,
        /// Target position (zero-based)
        to: usize,
    },

    /// Replace the entries of GROUP inside PARENT with rows
    Replace {
        /// Containing group
        parent: String,
        /// Nested group
        group: String,
        /// Row texts, in order
        rows: Vec<String>,
    },

    /// Apply an operation script (JSON array) and show the result
    Replay {
        /// Script file
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,
    },

    /// Print the seed board as JSON
    Seed,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a config template
    Template,
}
