//! storylint-analysis: The two manuscript analysis engines
//!
//! - Diff: line-level LCS diff with a word-level refinement pass, used for
//!   chapter snapshot comparison
//! - Validator: six independent rule groups scanning the ordered chapter
//!   corpus for narrative defects, merged with AI findings and filtered
//!   against user dismissals
//!
//! Both engines are synchronous pure functions over already-materialized
//! data; neither performs I/O.

pub mod dates;
pub mod diff;
pub mod validator;

// Re-exports for convenience
pub use diff::{
    compute_line_diff, compute_word_diff, refine_line_diff, DiffKind, DiffLine, InlineSegment,
    WordDiff,
};
pub use validator::{filter_dismissed, run_validator, run_validator_with};
