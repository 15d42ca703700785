//! Diff output types, consumed by the side-by-side diff table.

use serde::{Deserialize, Serialize};

/// What happened to a line between the two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

/// A run of text within a modified line, flagged if it differs between sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSegment {
    pub text: String,
    pub changed: bool,
}

/// One row of a line-level diff.
///
/// Line numbers are 1-based; `left_line` is absent for added lines and
/// `right_line` for removed ones. The `old_*`/`new_*` fields are only
/// populated for `Modified` rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub content: String,
    #[serde(default)]
    pub left_line: Option<u32>,
    #[serde(default)]
    pub right_line: Option<u32>,
    #[serde(default)]
    pub old_content: Option<String>,
    #[serde(default)]
    pub new_content: Option<String>,
    #[serde(default)]
    pub old_segments: Option<Vec<InlineSegment>>,
    #[serde(default)]
    pub new_segments: Option<Vec<InlineSegment>>,
}

impl DiffLine {
    pub(crate) fn unchanged(content: &str, left: u32, right: u32) -> Self {
        Self {
            kind: DiffKind::Unchanged,
            content: content.to_string(),
            left_line: Some(left),
            right_line: Some(right),
            old_content: None,
            new_content: None,
            old_segments: None,
            new_segments: None,
        }
    }

    pub(crate) fn added(content: &str, right: u32) -> Self {
        Self {
            kind: DiffKind::Added,
            content: content.to_string(),
            left_line: None,
            right_line: Some(right),
            old_content: None,
            new_content: None,
            old_segments: None,
            new_segments: None,
        }
    }

    pub(crate) fn removed(content: &str, left: u32) -> Self {
        Self {
            kind: DiffKind::Removed,
            content: content.to_string(),
            left_line: Some(left),
            right_line: None,
            old_content: None,
            new_content: None,
            old_segments: None,
            new_segments: None,
        }
    }
}
