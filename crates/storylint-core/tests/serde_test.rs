//! JSON boundary tests: the shapes the host persists must survive a
//! round trip, and sparse documents must still deserialize.

use storylint_core::{
    ChapterStatus, Severity, ValidationResult, ValidationSummary, ValidatorFinding, ValidatorInput,
};

#[test]
fn sparse_input_json_fills_defaults() {
    let input = ValidatorInput::from_json(
        r#"{
            "chapters": [
                {"id": "c1", "name": "Chapter 1", "order": 1, "file_path": "chapters/c1.md"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(input.chapters.len(), 1);
    assert_eq!(input.chapters[0].status, ChapterStatus::Draft);
    assert!(input.chapters[0].scenes.is_empty());
    assert!(input.dismissed.is_empty());
    assert!(input.whole_story_analysis.is_none());
}

#[test]
fn unknown_status_is_tolerated() {
    let input = ValidatorInput::from_json(
        r#"{
            "chapters": [
                {"id": "c1", "name": "Chapter 1", "order": 1, "status": "polished",
                 "file_path": "chapters/c1.md"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(input.chapters[0].status, ChapterStatus::Unknown);
}

#[test]
fn malformed_json_is_an_error_not_a_panic() {
    assert!(ValidatorInput::from_json("{not json").is_err());
}

#[test]
fn input_round_trips() {
    let original = ValidatorInput::from_json(
        r#"{
            "chapters": [
                {"id": "c1", "name": "Chapter 1", "order": 1, "status": "final",
                 "act": "Act 1", "date": "Day 3", "file_path": "chapters/c1.md",
                 "scenes": ["Opening"]}
            ],
            "dismissed": [{"fingerprint": "timeline.missingDate|chapters/c1.md||", "rule_id": "timeline.missingDate"}]
        }"#,
    )
    .unwrap();
    let reparsed = ValidatorInput::from_json(&original.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.chapters[0].date.as_deref(), Some("Day 3"));
    assert_eq!(reparsed.dismissed, original.dismissed);
}

#[test]
fn result_serializes_with_lowercase_enums() {
    let finding = ValidatorFinding {
        rule_id: "pacing.flatArc".to_string(),
        category: storylint_core::Category::Pacing,
        severity: Severity::Warning,
        title: "Flat intensity arc".to_string(),
        description: "Intensity barely moves.".to_string(),
        file_path: None,
        scene_name: None,
        entities: Default::default(),
        fingerprint: "pacing.flatArc|||".to_string(),
        source: Default::default(),
    };
    let result = ValidationResult {
        timestamp_ms: 0,
        summary: ValidationSummary::tally(std::slice::from_ref(&finding)),
        findings: vec![finding],
    };
    let json = result.to_json().unwrap();
    assert!(json.contains(r#""category":"pacing""#));
    assert!(json.contains(r#""severity":"warning""#));
    assert!(json.contains(r#""source":"rule""#));
    assert_eq!(result.summary.warnings, 1);
}
