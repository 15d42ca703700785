//! Finding types — the output unit of every validation rule, plus the
//! severity summary and the dismissal record.

mod fingerprint;

pub use fingerprint::fingerprint;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    #[default]
    Info,
}

/// Which narrative concern a rule group covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Timeline,
    Characters,
    Plotlines,
    Structure,
    Continuity,
    Pacing,
}

/// Whether a finding came from a deterministic rule or the AI pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FindingSource {
    #[default]
    Rule,
    Ai,
}

/// One detected issue or observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorFinding {
    /// Identifier of the producing rule, e.g. `timeline.dateOrder`.
    pub rule_id: String,
    pub category: Category,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Chapter file the finding is anchored to, if any.
    #[serde(default)]
    pub file_path: Option<String>,
    /// Scene the finding is anchored to, if any.
    #[serde(default)]
    pub scene_name: Option<String>,
    /// Entities (characters, tags, acts) the finding involves.
    #[serde(default)]
    pub entities: SmallVec<[String; 4]>,
    /// Stable identity used to match dismissals across runs.
    pub fingerprint: String,
    #[serde(default)]
    pub source: FindingSource,
}

/// A user's persisted choice to suppress one finding.
///
/// Matched purely by literal fingerprint equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissedFinding {
    pub fingerprint: String,
    pub rule_id: String,
}

/// Counts by severity for one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationSummary {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl ValidationSummary {
    /// Tally severities over a finding list.
    pub fn tally(findings: &[ValidatorFinding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.info += 1,
            }
        }
        summary
    }
}

/// Immutable snapshot of one validation run. Re-running produces a new
/// result; nothing mutates one in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Unix timestamp of the run, in milliseconds.
    pub timestamp_ms: u64,
    pub findings: Vec<ValidatorFinding>,
    pub summary: ValidationSummary,
}

impl ValidationResult {
    /// Serialize for the host's findings panel.
    pub fn to_json(&self) -> Result<String, crate::errors::StorylintError> {
        Ok(serde_json::to_string(self)?)
    }
}
