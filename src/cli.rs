use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "revpdf")]
#[command(about = "Reverse the page order of a PDF, optionally within a page range")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Reverse page order into a new file
    Reverse {
        /// PDF file to reverse
        path: PathBuf,

        /// Page range "START-END", 1-indexed inclusive; either side may be
        /// empty. Unparseable input falls back to all pages with a warning.
        #[arg(short, long)]
        pages: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Display PDF metadata
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },
}
