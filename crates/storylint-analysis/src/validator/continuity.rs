//! Continuity findings.
//!
//! Cross-reference fact checking ("a dead character reappears") is not
//! derivable from the structured caches, so this group carries no
//! deterministic rules. Its findings come entirely from the AI analysis
//! caches: the per-chapter entries and the optional whole-story pass. They
//! flow through the same dismissal filter as everything else.

use smallvec::SmallVec;
use storylint_core::{
    fingerprint, AiFinding, Category, FindingSource, ValidatorConfig, ValidatorFinding,
    ValidatorInput,
};

use super::sorted_chapters;

pub fn detect(input: &ValidatorInput, _cfg: &ValidatorConfig) -> Vec<ValidatorFinding> {
    let mut findings = Vec::new();

    for chapter in sorted_chapters(input) {
        if let Some(entry) = input.mentions.get(&chapter.file_path) {
            for ai in &entry.ai_findings {
                findings.push(from_ai(ai, Some(chapter.file_path.as_str())));
            }
        }
    }

    if let Some(story) = &input.whole_story_analysis {
        for ai in story {
            findings.push(from_ai(ai, None));
        }
    }

    findings
}

/// Lift an AI observation into a continuity finding. The title doubles as
/// the fingerprint disambiguator since AI findings carry no rule identity of
/// their own.
fn from_ai(ai: &AiFinding, file_path: Option<&str>) -> ValidatorFinding {
    let entities: Vec<&str> = ai.entities.iter().map(String::as_str).collect();
    ValidatorFinding {
        rule_id: "continuity.ai".to_string(),
        category: Category::Continuity,
        severity: ai.severity,
        title: ai.title.clone(),
        description: ai.description.clone(),
        file_path: file_path.map(str::to_string),
        scene_name: ai.scene_name.clone(),
        entities: ai.entities.iter().cloned().collect::<SmallVec<[String; 4]>>(),
        fingerprint: fingerprint(
            "continuity.ai",
            file_path,
            ai.scene_name.as_deref(),
            &entities,
            Some(ai.title.as_str()),
        ),
        source: FindingSource::Ai,
    }
}
