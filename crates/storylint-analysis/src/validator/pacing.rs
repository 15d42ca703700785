//! Pacing rules — intensity drops, emotion streaks, flat arcs, missing
//! climax, dry spells, dialogue balance.
//!
//! All of these operate on the single ordered list of scenes across the
//! whole manuscript (chapter order, then scene order within the chapter).
//! Only scenes with cached metadata take part.

use storylint_core::{
    Category, SceneMetadata, Severity, ValidatorConfig, ValidatorFinding, ValidatorInput,
};

use super::{finding, sorted_chapters};

struct SceneRef<'a> {
    file_path: &'a str,
    scene: &'a str,
    meta: &'a SceneMetadata,
}

pub fn detect(input: &ValidatorInput, cfg: &ValidatorConfig) -> Vec<ValidatorFinding> {
    let mut scenes: Vec<SceneRef<'_>> = Vec::new();
    for chapter in sorted_chapters(input) {
        let Some(stats) = input.scene_stats.get(&chapter.file_path) else {
            continue;
        };
        for scene in &chapter.scenes {
            if let Some(meta) = stats.scenes.get(scene) {
                scenes.push(SceneRef { file_path: &chapter.file_path, scene, meta });
            }
        }
    }

    let mut findings = Vec::new();
    detect_intensity_drops(&scenes, cfg, &mut findings);
    detect_emotion_streaks(&scenes, cfg, &mut findings);
    detect_flat_arc(&scenes, cfg, &mut findings);
    detect_missing_climax(&scenes, cfg, &mut findings);
    detect_dry_spells(&scenes, cfg, &mut findings);
    detect_dialogue_heavy(&scenes, cfg, &mut findings);
    findings
}

fn detect_intensity_drops(scenes: &[SceneRef<'_>], cfg: &ValidatorConfig, findings: &mut Vec<ValidatorFinding>) {
    for pair in scenes.windows(2) {
        let (Some(prev), Some(current)) = (pair[0].meta.intensity, pair[1].meta.intensity) else {
            continue;
        };
        if prev - current >= cfg.intensity_drop {
            findings.push(finding(
                "pacing.intensityDrop",
                Category::Pacing,
                Severity::Warning,
                "Sharp intensity drop",
                format!(
                    "Intensity falls from {:.0} to {:.0} going into scene \"{}\".",
                    prev, current, pair[1].scene,
                ),
                Some(pair[1].file_path),
                Some(pair[1].scene),
                &[],
                None,
            ));
        }
    }
}

fn detect_emotion_streaks(scenes: &[SceneRef<'_>], cfg: &ValidatorConfig, findings: &mut Vec<ValidatorFinding>) {
    let mut start = 0;
    while start < scenes.len() {
        let Some(emotion) = scenes[start].meta.emotion.as_deref().filter(|e| !e.is_empty()) else {
            start += 1;
            continue;
        };
        let mut end = start + 1;
        while end < scenes.len() && scenes[end].meta.emotion.as_deref() == Some(emotion) {
            end += 1;
        }
        let count = end - start;
        if count >= cfg.emotion_streak_len {
            findings.push(finding(
                "pacing.emotionStreak",
                Category::Pacing,
                Severity::Info,
                "Emotion streak",
                format!(
                    "{} consecutive scenes read as \"{}\", from \"{}\" through \"{}\".",
                    count,
                    emotion,
                    scenes[start].scene,
                    scenes[end - 1].scene,
                ),
                Some(scenes[start].file_path),
                Some(scenes[start].scene),
                &[emotion],
                None,
            ));
        }
        start = end;
    }
}

fn detect_flat_arc(scenes: &[SceneRef<'_>], cfg: &ValidatorConfig, findings: &mut Vec<ValidatorFinding>) {
    if scenes.len() < cfg.flat_arc_min_scenes {
        return;
    }
    let intensities: Vec<f64> = scenes.iter().filter_map(|s| s.meta.intensity).collect();
    let (Some(min), Some(max)) = (
        intensities.iter().copied().reduce(f64::min),
        intensities.iter().copied().reduce(f64::max),
    ) else {
        return;
    };
    if max - min <= cfg.flat_arc_range {
        findings.push(finding(
            "pacing.flatArc",
            Category::Pacing,
            Severity::Warning,
            "Flat intensity arc",
            format!(
                "Intensity only moves between {:.0} and {:.0} across the whole story.",
                min, max,
            ),
            None,
            None,
            &[],
            None,
        ));
    }
}

fn detect_missing_climax(scenes: &[SceneRef<'_>], cfg: &ValidatorConfig, findings: &mut Vec<ValidatorFinding>) {
    if scenes.len() < cfg.climax_min_scenes {
        return;
    }
    let tail_start = (scenes.len() as f64 * (1.0 - cfg.climax_window)).floor() as usize;
    let has_climax = scenes[tail_start.min(scenes.len())..]
        .iter()
        .filter_map(|s| s.meta.intensity)
        .any(|intensity| intensity >= cfg.climax_intensity);
    if !has_climax {
        findings.push(finding(
            "pacing.noClimax",
            Category::Pacing,
            Severity::Warning,
            "No climax in the finale",
            format!(
                "No scene in the final stretch reaches intensity {:.0}.",
                cfg.climax_intensity,
            ),
            None,
            None,
            &[],
            None,
        ));
    }
}

fn detect_dry_spells(scenes: &[SceneRef<'_>], cfg: &ValidatorConfig, findings: &mut Vec<ValidatorFinding>) {
    let mut streak = 0usize;
    for scene in scenes {
        let low = scene.meta.intensity.is_some_and(|intensity| intensity < cfg.dry_spell_intensity);
        if low {
            streak += 1;
            // Reported once, at the scene where the streak first exceeds the
            // tolerated length.
            if streak == cfg.dry_spell_len + 1 {
                findings.push(finding(
                    "pacing.drySpell",
                    Category::Pacing,
                    Severity::Info,
                    "Long dry spell",
                    format!(
                        "More than {} low-intensity scenes in a row by \"{}\".",
                        cfg.dry_spell_len, scene.scene,
                    ),
                    Some(scene.file_path),
                    Some(scene.scene),
                    &[],
                    None,
                ));
            }
        } else {
            streak = 0;
        }
    }
}

fn detect_dialogue_heavy(scenes: &[SceneRef<'_>], cfg: &ValidatorConfig, findings: &mut Vec<ValidatorFinding>) {
    if scenes.len() < cfg.dialogue_min_scenes {
        return;
    }
    let heavy = scenes
        .iter()
        .filter_map(|s| s.meta.dialogue_ratio)
        .filter(|ratio| *ratio > cfg.dialogue_heavy_ratio)
        .count();
    if heavy as f64 > cfg.dialogue_heavy_share * scenes.len() as f64 {
        findings.push(finding(
            "pacing.dialogueHeavy",
            Category::Pacing,
            Severity::Info,
            "Dialogue-heavy story",
            format!("{} of {} scenes are mostly dialogue.", heavy, scenes.len()),
            None,
            None,
            &[],
            None,
        ));
    }
}
