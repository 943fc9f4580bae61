//! Command-line interface definitions

use clap::{Parser, Subcommand};

/// Alfred workflow helper for Cursor's recent projects
#[derive(Debug, Parser)]
#[command(name = "cursor-launcher")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List recent projects as Alfred script filter JSON
    List,
    /// Open a project in Cursor
    Open {
        /// Local file:// path or vscode-remote:// URI
        uri: String,
    },
    /// Show version
    Version,
}
