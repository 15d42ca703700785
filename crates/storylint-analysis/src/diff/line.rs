//! Line-level diff.

use super::lcs::{diff_ops, DiffOp};
use super::types::DiffLine;

/// Upper bound on DP table cells (`lines_old * lines_new`) before the exact
/// LCS gives way to the prefix/suffix fallback. Bounds worst-case memory on
/// pathological inputs, nothing else.
const LCS_CELL_BUDGET: usize = 1_000_000;

/// Compute a line-level diff between two text blobs.
///
/// Within the cell budget this is a minimal-edit-distance diff with a
/// deterministic tie-break (additions preferred). Above it, `simple_diff`
/// trades diff quality for a linear-time bound.
pub fn compute_line_diff(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    let old: Vec<&str> = old_text.split('\n').collect();
    let new: Vec<&str> = new_text.split('\n').collect();

    if old.len().saturating_mul(new.len()) > LCS_CELL_BUDGET {
        tracing::debug!(
            old_lines = old.len(),
            new_lines = new.len(),
            "line diff over cell budget, using prefix/suffix fallback"
        );
        return simple_diff(&old, &new);
    }

    let mut lines = Vec::new();
    for op in diff_ops(&old, &new) {
        match op {
            DiffOp::Both(i, j) => lines.push(DiffLine::unchanged(old[i], i as u32 + 1, j as u32 + 1)),
            DiffOp::OldOnly(i) => lines.push(DiffLine::removed(old[i], i as u32 + 1)),
            DiffOp::NewOnly(j) => lines.push(DiffLine::added(new[j], j as u32 + 1)),
        }
    }
    lines
}

/// Fallback diff for oversized inputs: longest common literal prefix and
/// suffix become unchanged runs, everything between is one removed block
/// followed by one added block.
fn simple_diff(old: &[&str], new: &[&str]) -> Vec<DiffLine> {
    let mut prefix = 0;
    while prefix < old.len() && prefix < new.len() && old[prefix] == new[prefix] {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < old.len() - prefix
        && suffix < new.len() - prefix
        && old[old.len() - 1 - suffix] == new[new.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let mut lines = Vec::with_capacity(old.len().max(new.len()));
    for i in 0..prefix {
        lines.push(DiffLine::unchanged(old[i], i as u32 + 1, i as u32 + 1));
    }
    for i in prefix..old.len() - suffix {
        lines.push(DiffLine::removed(old[i], i as u32 + 1));
    }
    for j in prefix..new.len() - suffix {
        lines.push(DiffLine::added(new[j], j as u32 + 1));
    }
    for k in 0..suffix {
        let i = old.len() - suffix + k;
        let j = new.len() - suffix + k;
        lines.push(DiffLine::unchanged(old[i], i as u32 + 1, j as u32 + 1));
    }
    lines
}
