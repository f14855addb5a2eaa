use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use diff_chunker::chunker::chunk_patch;
use diff_chunker::cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let patch = read_patch(args.input.as_deref())?;
    let chunks = chunk_patch(Some(&patch));

    if args.summary {
        println!(
            "Added:   {} chunks, {} lines",
            chunks.added.len(),
            chunks.added_lines()
        );
        println!(
            "Removed: {} chunks, {} lines",
            chunks.removed.len(),
            chunks.removed_lines()
        );
    } else if args.pretty {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        println!("{}", serde_json::to_string(&chunks)?);
    }

    Ok(())
}

/// Read the patch text from a file, or from stdin when no path is given.
fn read_patch(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read patch file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read patch from stdin")?;
            Ok(buf)
        }
    }
}
