//! Character rule tests.

mod common;

use common::{add_character_mention, add_scene, chapter, input_with_chapters, scene_meta};
use storylint_analysis::run_validator;

#[test]
fn single_scene_character_is_an_orphan() {
    let mut input = input_with_chapters(vec![chapter("Chapter 1", 1), chapter("Chapter 2", 2)]);
    add_scene(&mut input, 0, "Opening", scene_meta(400, 5.0, ""));
    add_character_mention(&mut input, 0, Some("Opening"), "Drifter");

    let result = run_validator(&input);
    let orphans: Vec<_> =
        result.findings.iter().filter(|f| f.rule_id == "characters.orphan").collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].entities.as_slice(), ["Drifter"]);
    assert_eq!(orphans[0].scene_name.as_deref(), Some("Opening"));
}

#[test]
fn recurring_character_is_not_an_orphan() {
    let mut input = input_with_chapters(vec![chapter("Chapter 1", 1), chapter("Chapter 2", 2)]);
    add_scene(&mut input, 0, "Opening", scene_meta(400, 5.0, ""));
    add_scene(&mut input, 1, "Return", scene_meta(400, 5.0, ""));
    add_character_mention(&mut input, 0, Some("Opening"), "Mira");
    add_character_mention(&mut input, 1, Some("Return"), "Mira");

    let result = run_validator(&input);
    assert_eq!(result.findings.iter().filter(|f| f.rule_id == "characters.orphan").count(), 0);
}

#[test]
fn late_first_appearance_is_abrupt_with_enough_chapters() {
    let mut input = input_with_chapters(
        (1..=6).map(|i| chapter(&format!("Chapter {}", i), i)).collect(),
    );
    for index in 0..6 {
        add_scene(&mut input, index, "Scene A", scene_meta(500, 5.0, ""));
    }
    // First appears in chapter 5 of 6, past the 30th-percentile chapter.
    add_character_mention(&mut input, 4, Some("Scene A"), "Stranger");
    add_character_mention(&mut input, 5, Some("Scene A"), "Stranger");

    let result = run_validator(&input);
    let abrupt: Vec<_> =
        result.findings.iter().filter(|f| f.rule_id == "characters.abruptIntro").collect();
    assert_eq!(abrupt.len(), 1);
    assert_eq!(abrupt[0].entities.as_slice(), ["Stranger"]);
}

#[test]
fn abrupt_intro_needs_at_least_five_chapters() {
    let mut input = input_with_chapters(
        (1..=4).map(|i| chapter(&format!("Chapter {}", i), i)).collect(),
    );
    for index in 0..4 {
        add_scene(&mut input, index, "Scene A", scene_meta(500, 5.0, ""));
    }
    add_character_mention(&mut input, 3, Some("Scene A"), "Stranger");

    let result = run_validator(&input);
    assert_eq!(result.findings.iter().filter(|f| f.rule_id == "characters.abruptIntro").count(), 0);
}

#[test]
fn long_gap_between_appearances_is_flagged() {
    let mut input = input_with_chapters(
        (1..=10).map(|i| chapter(&format!("Chapter {}", i), i)).collect(),
    );
    for index in 0..10 {
        add_scene(&mut input, index, "Scene A", scene_meta(500, 5.0, ""));
    }
    // Appears in chapters 1 and 7: a 6-chapter gap against an order range of
    // 9, well over 40%.
    add_character_mention(&mut input, 0, Some("Scene A"), "Wanderer");
    add_character_mention(&mut input, 6, Some("Scene A"), "Wanderer");

    let result = run_validator(&input);
    let absences: Vec<_> =
        result.findings.iter().filter(|f| f.rule_id == "characters.longAbsence").collect();
    assert_eq!(absences.len(), 1);
    assert_eq!(absences[0].entities.as_slice(), ["Wanderer"]);
}

#[test]
fn frequent_character_without_pov_is_noted() {
    let mut input = input_with_chapters(
        (1..=5).map(|i| chapter(&format!("Chapter {}", i), i)).collect(),
    );
    for index in 0..5 {
        let mut meta = scene_meta(500, 5.0, "");
        meta.pov = Some("Mira".to_string());
        add_scene(&mut input, index, "Scene A", meta);
        add_character_mention(&mut input, index, Some("Scene A"), "Sidekick");
        add_character_mention(&mut input, index, Some("Scene A"), "Mira");
    }

    let result = run_validator(&input);
    let no_pov: Vec<_> =
        result.findings.iter().filter(|f| f.rule_id == "characters.noPov").collect();
    assert_eq!(no_pov.len(), 1);
    assert_eq!(no_pov[0].entities.as_slice(), ["Sidekick"]);
}
