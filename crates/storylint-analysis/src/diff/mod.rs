//! Snapshot diff engine — line-level LCS diff, word-level inline diff, and
//! the modified-line refinement pass.
//!
//! Total over any pair of strings: no input is an error.

mod lcs;
mod line;
mod refine;
mod types;
mod word;

pub use line::compute_line_diff;
pub use refine::refine_line_diff;
pub use types::{DiffKind, DiffLine, InlineSegment};
pub use word::{compute_word_diff, WordDiff};
