//! Validator rule engine.
//!
//! Six independent rule groups, each a pure function over the full input,
//! composed by concatenation in a fixed order. No rule depends on another;
//! iteration is always over chapters sorted by `order` (stable for equal
//! orders), so finding order and fingerprints are deterministic.

pub mod characters;
pub mod continuity;
pub mod pacing;
pub mod plotlines;
pub mod structure;
pub mod timeline;

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashSet;
use storylint_core::{
    fingerprint, Category, ChapterInfo, DismissedFinding, FindingSource, Severity,
    ValidationResult, ValidationSummary, ValidatorConfig, ValidatorFinding, ValidatorInput,
};

type RuleGroup = fn(&ValidatorInput, &ValidatorConfig) -> Vec<ValidatorFinding>;

/// The rule battery, in emission order.
const RULE_GROUPS: &[(&str, RuleGroup)] = &[
    ("timeline", timeline::detect),
    ("characters", characters::detect),
    ("plotlines", plotlines::detect),
    ("structure", structure::detect),
    ("continuity", continuity::detect),
    ("pacing", pacing::detect),
];

/// Run the full rule battery with product-default thresholds.
pub fn run_validator(input: &ValidatorInput) -> ValidationResult {
    run_validator_with(input, &ValidatorConfig::default())
}

/// Run the full rule battery with explicit thresholds.
///
/// All groups run unconditionally; their outputs are concatenated, filtered
/// against the dismissal list, and tallied into the severity summary.
pub fn run_validator_with(input: &ValidatorInput, cfg: &ValidatorConfig) -> ValidationResult {
    let mut findings = Vec::new();
    for (name, rule) in RULE_GROUPS {
        let group = rule(input, cfg);
        tracing::debug!(group = name, count = group.len(), "rule group finished");
        findings.extend(group);
    }

    let findings = filter_dismissed(findings, &input.dismissed);
    let summary = ValidationSummary::tally(&findings);
    ValidationResult { timestamp_ms: now_ms(), findings, summary }
}

/// Drop every finding whose fingerprint the user has dismissed.
pub fn filter_dismissed(
    findings: Vec<ValidatorFinding>,
    dismissed: &[DismissedFinding],
) -> Vec<ValidatorFinding> {
    if dismissed.is_empty() {
        return findings;
    }
    let suppressed: FxHashSet<&str> = dismissed.iter().map(|d| d.fingerprint.as_str()).collect();
    findings
        .into_iter()
        .filter(|finding| !suppressed.contains(finding.fingerprint.as_str()))
        .collect()
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Chapters sorted by `order`; the stable sort keeps input order for ties.
pub(crate) fn sorted_chapters(input: &ValidatorInput) -> Vec<&ChapterInfo> {
    let mut chapters: Vec<&ChapterInfo> = input.chapters.iter().collect();
    chapters.sort_by_key(|chapter| chapter.order);
    chapters
}

/// Construct a rule-sourced finding with its fingerprint sealed in.
#[allow(clippy::too_many_arguments)]
pub(crate) fn finding(
    rule_id: &str,
    category: Category,
    severity: Severity,
    title: &str,
    description: String,
    file_path: Option<&str>,
    scene_name: Option<&str>,
    entities: &[&str],
    extra: Option<&str>,
) -> ValidatorFinding {
    ValidatorFinding {
        rule_id: rule_id.to_string(),
        category,
        severity,
        title: title.to_string(),
        description,
        file_path: file_path.map(str::to_string),
        scene_name: scene_name.map(str::to_string),
        entities: entities.iter().map(|entity| entity.to_string()).collect(),
        fingerprint: fingerprint(rule_id, file_path, scene_name, entities, extra),
        source: FindingSource::Rule,
    }
}
