use crate::{Chunk, PatchChunks};
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Split a unified-diff patch into added and removed chunks with line numbers.
///
/// A chunk is a maximal run of consecutive `+` lines (or `-` lines) with no
/// context line or hunk header in between. Line numbers come from the running
/// old/new counters seeded by each `@@` header: the new-file counter advances
/// on added and context lines, the old-file counter on removed and context
/// lines. The `+++`/`---` file markers are treated as context.
///
/// `None` and the empty string both mean "no textual change" (binary file,
/// rename-only) and yield empty results. The function never fails: a `@@`
/// line that does not parse as a hunk header leaves the counters at their
/// prior values and the scan continues.
pub fn chunk_patch(patch: Option<&str>) -> PatchChunks {
    let Some(patch) = patch else {
        return PatchChunks::default();
    };
    if patch.is_empty() {
        return PatchChunks::default();
    }

    let mut chunks = PatchChunks::default();
    let mut added = Run::default();
    let mut removed = Run::default();

    let mut old_line: u32 = 0;
    let mut new_line: u32 = 0;

    // Split on '\n' rather than lines() so content is carried verbatim.
    for line in patch.split('\n') {
        if line.starts_with("@@") {
            // A hunk header ends any in-progress run, same as a context line.
            added.flush_into(&mut chunks.added);
            removed.flush_into(&mut chunks.removed);

            match parse_hunk_header(line) {
                Some((old_start, new_start)) => {
                    old_line = old_start;
                    new_line = new_start;
                }
                None => {
                    // Tolerated: keep scanning with stale counters so the
                    // rest of the patch still chunks, at the cost of wrong
                    // line numbers within this hunk.
                    warn!(header = line, "malformed hunk header, line numbers may be stale");
                }
            }
        } else if line.starts_with('+') && !line.starts_with("+++") {
            added.push(new_line, &line[1..]);
            new_line = new_line.saturating_add(1);
        } else if line.starts_with('-') && !line.starts_with("---") {
            removed.push(old_line, &line[1..]);
            old_line = old_line.saturating_add(1);
        } else {
            // Context line (including blank lines and the +++/--- markers):
            // present in both files, terminates both runs.
            added.flush_into(&mut chunks.added);
            removed.flush_into(&mut chunks.removed);
            old_line = old_line.saturating_add(1);
            new_line = new_line.saturating_add(1);
        }
    }

    added.flush_into(&mut chunks.added);
    removed.flush_into(&mut chunks.removed);

    chunks
}

/// Extract `(old_start, new_start)` from a `@@ -a,b +c,d @@` header.
///
/// Counts are ignored; the chunker trusts its own running counters. Returns
/// `None` when the line does not match, which callers treat as a degraded
/// (not fatal) condition.
fn parse_hunk_header(line: &str) -> Option<(u32, u32)> {
    static HUNK_HEADER: OnceLock<Regex> = OnceLock::new();
    let re = HUNK_HEADER
        .get_or_init(|| Regex::new(r"^@@ -(\d+),?\d* \+(\d+),?\d* @@").expect("valid regex"));

    let caps = re.captures(line)?;
    let old_start = caps[1].parse().ok()?;
    let new_start = caps[2].parse().ok()?;
    Some((old_start, new_start))
}

/// Accumulator for an in-progress run of same-kind lines.
#[derive(Default)]
struct Run {
    lines: Vec<u32>,
    text: Vec<String>,
}

impl Run {
    fn push(&mut self, line_no: u32, content: &str) {
        self.lines.push(line_no);
        self.text.push(content.to_string());
    }

    /// Emit the pending run as a chunk and reset. No-op when empty.
    fn flush_into(&mut self, out: &mut Vec<Chunk>) {
        if self.lines.is_empty() {
            return;
        }
        out.push(Chunk {
            lines: std::mem::take(&mut self.lines),
            code: std::mem::take(&mut self.text).join("\n"),
        });
    }
}
