//! storylint-core: Shared types for the manuscript analysis engine
//!
//! This crate provides the data model consumed by `storylint-analysis`:
//! - Model: chapters, scene metadata, mention caches, validator input
//! - Findings: categorized findings, severity summary, fingerprints, dismissals
//! - Config: tunable rule thresholds with product defaults
//! - Errors: the JSON ingestion error surface

pub mod config;
pub mod errors;
pub mod findings;
pub mod model;

// Re-exports for convenience
pub use config::ValidatorConfig;
pub use errors::StorylintError;
pub use findings::{
    fingerprint, Category, DismissedFinding, FindingSource, Severity, ValidationResult,
    ValidationSummary, ValidatorFinding,
};
pub use model::{
    AiFinding, ChapterInfo, ChapterSceneStats, ChapterStatus, MentionCacheEntry, MentionSets,
    SceneMetadata, ValidatorInput,
};
