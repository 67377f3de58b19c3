//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for mediashelf using the `clap` crate.
//!
//! # Commands
//!
//! - **login / signup / logout / status**: session management
//! - **list**: show the gallery in display order (default)
//! - **tag**: replace a file's tags from comma-separated text
//! - **move**: swap the positions of two files
//! - **share / link**: toggle sharing and copy share links
//! - **view**: count a view of a file
//! - **upload**: stage local files with tags and upload them in one batch
//! - **config**: read and change settings
//!
//! # Examples
//!
//! ```no_run
//! use mediashelf::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Move { source, target } => println!("swap {source} and {target}"),
//!     _ => {}
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "mediashelf")]
#[command(about = "Upload, tag, arrange and share your media library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        /// Account email (prompted if omitted)
        #[arg(short = 'e', long = "email")]
        email: Option<String>,
    },

    /// Create a new account
    Signup {
        /// Account email (prompted if omitted)
        #[arg(short = 'e', long = "email")]
        email: Option<String>,

        /// First name (prompted if omitted)
        #[arg(long = "first-name")]
        first_name: Option<String>,

        /// Last name (prompted if omitted)
        #[arg(long = "last-name")]
        last_name: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show whether a session is stored and which service is configured
    Status,

    /// List files in display order (default)
    #[command(visible_alias = "ls")]
    List,

    /// Replace a file's tags with comma-separated text
    #[command(visible_alias = "t")]
    Tag {
        /// File id
        id: String,

        /// Tags, comma separated (e.g. "beach, summer")
        #[arg(value_name = "TAGS")]
        tags: String,
    },

    /// Swap the positions of two files
    #[command(visible_alias = "mv")]
    Move {
        /// File being dragged
        source: String,

        /// File it is dropped on
        target: String,
    },

    /// Make a file public (or private with --off) and print its link
    Share {
        /// File id
        id: String,

        /// Stop sharing the file
        #[arg(long = "off")]
        off: bool,
    },

    /// Copy a file's share link to the clipboard
    #[command(name = "link", visible_alias = "copy-link")]
    Link {
        /// File id
        id: String,

        /// Print the link instead of copying it
        #[arg(short = 'p', long = "print")]
        print: bool,
    },

    /// Count a view of a file
    View {
        /// File id
        id: String,
    },

    /// Upload local files in one batch
    #[command(visible_alias = "up")]
    Upload {
        /// Files to upload
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Tags applied to every file, comma separated
        #[arg(short = 't', long = "tags", value_name = "TAGS")]
        tags: Option<String>,

        /// Review each file: edit its tags or drop it before uploading
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,
    },

    /// Read or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Setting in KEY=VALUE form (e.g. api_url=https://media.example.com)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
    /// Get a configuration value
    Get {
        /// Setting name
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse CLI arguments from the process
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, `list` when none was given
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}

impl Commands {
    /// Whether the command needs a signed-in session
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::Login { .. } | Self::Signup { .. } | Self::Logout | Self::Status | Self::Config { .. }
        )
    }
}

/// Split a `KEY=VALUE` setting
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
}
