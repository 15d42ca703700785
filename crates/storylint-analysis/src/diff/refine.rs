//! Modified-line refinement.
//!
//! A raw line diff renders "one line vanished and an unrelated one appeared"
//! for every edit. This pass pairs adjacent removed/added runs positionally
//! and, when the sides are similar enough, collapses each pair into a single
//! `modified` row carrying inline word-diff segments.

use super::types::{DiffKind, DiffLine};
use super::word::compute_word_diff;

/// Minimum similarity before a removed/added pair becomes one modified line.
/// Deliberately low: the bar only exists to avoid pairing two lines that
/// share literally nothing. Tunable product behavior, not correctness.
const SIMILARITY_THRESHOLD: f64 = 0.20;

/// Convert adjacent removed/added runs into `modified` lines where similar.
///
/// Leftover lines from unequal run lengths pass through untouched.
pub fn refine_line_diff(lines: Vec<DiffLine>) -> Vec<DiffLine> {
    let mut refined = Vec::with_capacity(lines.len());
    let mut idx = 0;

    while idx < lines.len() {
        if lines[idx].kind != DiffKind::Removed {
            refined.push(lines[idx].clone());
            idx += 1;
            continue;
        }

        let removed_start = idx;
        while idx < lines.len() && lines[idx].kind == DiffKind::Removed {
            idx += 1;
        }
        let added_start = idx;
        while idx < lines.len() && lines[idx].kind == DiffKind::Added {
            idx += 1;
        }

        let removed = &lines[removed_start..added_start];
        let added = &lines[added_start..idx];
        let pairs = removed.len().min(added.len());

        for pair in 0..pairs {
            let old_line = &removed[pair];
            let new_line = &added[pair];
            match try_pair(old_line, new_line) {
                Some(modified) => refined.push(modified),
                None => {
                    refined.push(old_line.clone());
                    refined.push(new_line.clone());
                }
            }
        }
        refined.extend(removed[pairs..].iter().cloned());
        refined.extend(added[pairs..].iter().cloned());
    }

    refined
}

/// Pair one removed line with one added line if they clear the similarity
/// threshold.
fn try_pair(old_line: &DiffLine, new_line: &DiffLine) -> Option<DiffLine> {
    let word_diff = compute_word_diff(&old_line.content, &new_line.content);

    let unchanged_chars: usize = word_diff
        .old_segments
        .iter()
        .filter(|segment| !segment.changed)
        .map(|segment| segment.text.chars().count())
        .sum();
    let old_chars = old_line.content.chars().count();
    let new_chars = new_line.content.chars().count();
    let similarity = unchanged_chars as f64 / old_chars.max(new_chars).max(1) as f64;

    if similarity < SIMILARITY_THRESHOLD {
        return None;
    }

    Some(DiffLine {
        kind: DiffKind::Modified,
        content: new_line.content.clone(),
        left_line: old_line.left_line,
        right_line: new_line.right_line,
        old_content: Some(old_line.content.clone()),
        new_content: Some(new_line.content.clone()),
        old_segments: Some(word_diff.old_segments),
        new_segments: Some(word_diff.new_segments),
    })
}
