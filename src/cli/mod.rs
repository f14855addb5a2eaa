use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "diff-chunker",
    about = "Split unified-diff patches into added/removed chunks with line numbers"
)]
pub struct Cli {
    /// Patch file to chunk. Reads from stdin when omitted.
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pub pretty: bool,

    /// Print a chunk/line count summary instead of JSON.
    #[arg(short, long)]
    pub summary: bool,
}

/// Parse CLI arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
