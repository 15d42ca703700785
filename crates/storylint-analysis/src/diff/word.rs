//! Word-level (inline) diff.
//!
//! The same LCS walk as the line diff, run over tokens within a single line.
//! Tokens are alternating runs of whitespace and non-whitespace, so the
//! segments of each side rejoin to the original line exactly.

use serde::{Deserialize, Serialize};

use super::lcs::{diff_ops, DiffOp};
use super::types::InlineSegment;

/// Inline segments for both sides of a modified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    pub old_segments: Vec<InlineSegment>,
    pub new_segments: Vec<InlineSegment>,
}

/// Compute the inline diff between two lines.
pub fn compute_word_diff(old_line: &str, new_line: &str) -> WordDiff {
    let old_tokens = tokenize(old_line);
    let new_tokens = tokenize(new_line);

    let mut old_segments = Vec::new();
    let mut new_segments = Vec::new();
    for op in diff_ops(&old_tokens, &new_tokens) {
        match op {
            DiffOp::Both(i, j) => {
                push_segment(&mut old_segments, old_tokens[i], false);
                push_segment(&mut new_segments, new_tokens[j], false);
            }
            DiffOp::OldOnly(i) => push_segment(&mut old_segments, old_tokens[i], true),
            DiffOp::NewOnly(j) => push_segment(&mut new_segments, new_tokens[j], true),
        }
    }

    WordDiff { old_segments, new_segments }
}

/// Append a token, merging into the previous segment when the changed flag
/// matches, for compact rendering.
fn push_segment(segments: &mut Vec<InlineSegment>, token: &str, changed: bool) {
    if let Some(last) = segments.last_mut() {
        if last.changed == changed {
            last.text.push_str(token);
            return;
        }
    }
    segments.push(InlineSegment { text: token.to_string(), changed });
}

/// Split a line into alternating runs of whitespace and non-whitespace.
/// Lossless: concatenating the tokens reproduces the line byte for byte.
fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;
    for (idx, ch) in line.char_indices() {
        let ws = ch.is_whitespace();
        if let Some(prev) = in_whitespace {
            if prev != ws {
                tokens.push(&line[start..idx]);
                start = idx;
            }
        }
        in_whitespace = Some(ws);
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[InlineSegment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn tokenize_preserves_whitespace_runs() {
        assert_eq!(tokenize("a  b"), vec!["a", "  ", "b"]);
        assert_eq!(tokenize("  lead"), vec!["  ", "lead"]);
        assert_eq!(tokenize(""), Vec::<&str>::new());
    }

    #[test]
    fn segments_rejoin_to_the_original_lines() {
        let wd = compute_word_diff("The cat sat.", "The cat sat down.");
        assert_eq!(joined(&wd.old_segments), "The cat sat.");
        assert_eq!(joined(&wd.new_segments), "The cat sat down.");
    }

    #[test]
    fn the_changed_tail_is_marked_on_both_sides() {
        // "sat." and "sat" are distinct tokens, so the trailing region is
        // changed on both sides; "The cat " stays unchanged.
        let wd = compute_word_diff("The cat sat.", "The cat sat down.");
        assert_eq!(
            wd.old_segments,
            vec![
                InlineSegment { text: "The cat ".to_string(), changed: false },
                InlineSegment { text: "sat.".to_string(), changed: true },
            ]
        );
        let changed: Vec<&InlineSegment> =
            wd.new_segments.iter().filter(|s| s.changed).collect();
        assert_eq!(changed.len(), 1);
        assert!(changed[0].text.contains("down."));
    }

    #[test]
    fn adjacent_same_flag_segments_are_merged() {
        let wd = compute_word_diff("one two", "one two");
        assert_eq!(wd.old_segments.len(), 1);
        assert!(!wd.old_segments[0].changed);
        assert_eq!(wd.old_segments[0].text, "one two");
    }
}
