pub mod chunker;
pub mod cli;

use serde::{Deserialize, Serialize};

/// A maximal contiguous run of added-only or removed-only lines within a hunk.
///
/// `lines` holds the new-file line number of each line for added chunks, or
/// the old-file line number for removed chunks, in the order encountered.
/// `code` is the run's text with the leading `+`/`-` markers stripped, joined
/// by newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub lines: Vec<u32>,
    pub code: String,
}

/// All chunks extracted from one file's patch, in patch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchChunks {
    pub added: Vec<Chunk>,
    pub removed: Vec<Chunk>,
}

impl PatchChunks {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Total number of added lines across all chunks.
    pub fn added_lines(&self) -> usize {
        self.added.iter().map(|c| c.lines.len()).sum()
    }

    /// Total number of removed lines across all chunks.
    pub fn removed_lines(&self) -> usize {
        self.removed.iter().map(|c| c.lines.len()).sum()
    }
}
