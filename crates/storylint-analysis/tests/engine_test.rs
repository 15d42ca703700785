//! Engine-level behavior: fingerprint stability, dismissal persistence,
//! AI-finding merge, and the severity summary.

mod common;

use common::{add_scene, chapter, input_with_chapters, scene_meta};
use storylint_analysis::run_validator;
use storylint_core::{AiFinding, DismissedFinding, FindingSource, Severity, ValidatorInput};

fn flagged_input() -> ValidatorInput {
    let mut first = chapter("Chapter 1", 1);
    first.date = Some("2024-02-01".to_string());
    let mut second = chapter("Chapter 2", 2);
    second.date = Some("2024-01-01".to_string());
    let mut input = input_with_chapters(vec![first, second]);
    add_scene(&mut input, 0, "Opening", scene_meta(8, 5.0, ""));
    input
}

#[test]
fn identical_input_yields_identical_fingerprints() {
    let input = flagged_input();
    let first_run: Vec<String> =
        run_validator(&input).findings.into_iter().map(|f| f.fingerprint).collect();
    let second_run: Vec<String> =
        run_validator(&input).findings.into_iter().map(|f| f.fingerprint).collect();
    assert!(!first_run.is_empty());
    assert_eq!(first_run, second_run);
}

#[test]
fn dismissed_finding_stays_gone_until_its_identity_changes() {
    let mut input = flagged_input();
    let first_run = run_validator(&input);
    let target = first_run
        .findings
        .iter()
        .find(|f| f.rule_id == "timeline.dateOrder")
        .expect("date order violation present");

    input.dismissed.push(DismissedFinding {
        fingerprint: target.fingerprint.clone(),
        rule_id: target.rule_id.clone(),
    });
    let second_run = run_validator(&input);
    assert!(!second_run.findings.iter().any(|f| f.rule_id == "timeline.dateOrder"));

    // Moving the violation to a different chapter changes the fingerprint,
    // so the stale dismissal no longer matches.
    input.chapters[1].file_path = "chapters/renumbered.md".to_string();
    let third_run = run_validator(&input);
    assert!(third_run.findings.iter().any(|f| f.rule_id == "timeline.dateOrder"));
}

#[test]
fn ai_findings_are_merged_as_continuity_with_source_ai() {
    let mut input = flagged_input();
    let file_path = input.chapters[0].file_path.clone();
    input.mentions.entry(file_path.clone()).or_default().ai_findings.push(AiFinding {
        title: "Dead character reappears".to_string(),
        description: "Tomas died in chapter 1 but speaks here.".to_string(),
        severity: Severity::Error,
        scene_name: Some("Opening".to_string()),
        entities: vec!["Tomas".to_string()],
    });
    input.whole_story_analysis = Some(vec![AiFinding {
        title: "Season drifts backwards".to_string(),
        description: "Winter precedes autumn across the manuscript.".to_string(),
        severity: Severity::Warning,
        scene_name: None,
        entities: Vec::new(),
    }]);

    let result = run_validator(&input);
    let ai: Vec<_> = result.findings.iter().filter(|f| f.source == FindingSource::Ai).collect();
    assert_eq!(ai.len(), 2);
    assert!(ai.iter().all(|f| f.rule_id == "continuity.ai"));
    let chapter_finding =
        ai.iter().find(|f| f.title == "Dead character reappears").expect("chapter AI finding");
    assert_eq!(chapter_finding.severity, Severity::Error);
    assert_eq!(chapter_finding.file_path.as_deref(), Some(file_path.as_str()));

    // AI findings are dismissable like any other.
    input.dismissed.push(DismissedFinding {
        fingerprint: chapter_finding.fingerprint.clone(),
        rule_id: chapter_finding.rule_id.clone(),
    });
    let second = run_validator(&input);
    assert_eq!(second.findings.iter().filter(|f| f.source == FindingSource::Ai).count(), 1);
}

#[test]
fn summary_counts_match_the_findings() {
    let input = flagged_input();
    let result = run_validator(&input);
    assert_eq!(
        result.summary.errors,
        result.findings.iter().filter(|f| f.severity == Severity::Error).count()
    );
    assert_eq!(
        result.summary.warnings,
        result.findings.iter().filter(|f| f.severity == Severity::Warning).count()
    );
    assert_eq!(
        result.summary.info,
        result.findings.iter().filter(|f| f.severity == Severity::Info).count()
    );
    assert!(result.summary.warnings >= 1);
}

#[test]
fn empty_input_produces_no_findings() {
    let result = run_validator(&ValidatorInput::default());
    assert!(result.findings.is_empty());
    assert_eq!(result.summary, Default::default());
}
