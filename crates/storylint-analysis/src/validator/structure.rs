//! Structure rules — acts, scene counts, word balance, status ordering.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use storylint_core::{
    Category, ChapterStatus, Severity, ValidatorConfig, ValidatorFinding, ValidatorInput,
};

use super::{finding, sorted_chapters};

/// Generic scene names left over from templates.
static PLACEHOLDER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(scene\s*\d+|untitled(?:\s.*)?|new\s+scene|tbd)$").unwrap());

pub fn detect(input: &ValidatorInput, cfg: &ValidatorConfig) -> Vec<ValidatorFinding> {
    let chapters = sorted_chapters(input);
    let mut findings = Vec::new();

    // Word count per chapter: the host's aggregate when present, otherwise
    // the sum of its cached scenes.
    let mut chapter_words: Vec<u64> = Vec::with_capacity(chapters.len());
    for chapter in &chapters {
        let words = match input.scene_stats.get(&chapter.file_path) {
            Some(stats) if stats.total_words > 0 => u64::from(stats.total_words),
            Some(stats) => chapter
                .scenes
                .iter()
                .filter_map(|scene| stats.scenes.get(scene))
                .map(|meta| u64::from(meta.word_count))
                .sum(),
            None => 0,
        };
        chapter_words.push(words);
    }

    for chapter in &chapters {
        if chapter.act.as_deref().map_or(true, |act| act.trim().is_empty()) {
            findings.push(finding(
                "structure.missingAct",
                Category::Structure,
                Severity::Info,
                "No act assigned",
                format!("Chapter \"{}\" is not assigned to an act.", chapter.name),
                Some(chapter.file_path.as_str()),
                None,
                &[],
                None,
            ));
        }

        if chapter.scenes.is_empty() {
            findings.push(finding(
                "structure.noScenes",
                Category::Structure,
                Severity::Info,
                "Chapter has no scenes",
                format!("Chapter \"{}\" contains no scenes.", chapter.name),
                Some(chapter.file_path.as_str()),
                None,
                &[],
                None,
            ));
        } else if chapter.scenes.len() > cfg.max_scenes_per_chapter {
            findings.push(finding(
                "structure.tooManyScenes",
                Category::Structure,
                Severity::Info,
                "Chapter is overloaded",
                format!(
                    "Chapter \"{}\" has {} scenes; consider splitting it.",
                    chapter.name,
                    chapter.scenes.len(),
                ),
                Some(chapter.file_path.as_str()),
                None,
                &[],
                None,
            ));
        }

        let stats = input.scene_stats.get(&chapter.file_path);
        for scene in &chapter.scenes {
            if let Some(meta) = stats.and_then(|stats| stats.scenes.get(scene)) {
                if meta.word_count < cfg.min_scene_words {
                    findings.push(finding(
                        "structure.emptyScene",
                        Category::Structure,
                        Severity::Warning,
                        "Empty scene",
                        format!(
                            "Scene \"{}\" in chapter \"{}\" has only {} words.",
                            scene, chapter.name, meta.word_count,
                        ),
                        Some(chapter.file_path.as_str()),
                        Some(scene.as_str()),
                        &[],
                        None,
                    ));
                }
            }

            if PLACEHOLDER_NAME.is_match(scene.trim()) {
                findings.push(finding(
                    "structure.placeholderName",
                    Category::Structure,
                    Severity::Info,
                    "Placeholder scene name",
                    format!(
                        "Scene \"{}\" in chapter \"{}\" still has a placeholder name.",
                        scene, chapter.name,
                    ),
                    Some(chapter.file_path.as_str()),
                    Some(scene.as_str()),
                    &[],
                    None,
                ));
            }
        }
    }

    // Chapter imbalance against the average of chapters that have any words.
    let counted: Vec<u64> = chapter_words.iter().copied().filter(|words| *words > 0).collect();
    if !counted.is_empty() {
        let average = counted.iter().sum::<u64>() as f64 / counted.len() as f64;
        for (chapter, words) in chapters.iter().zip(&chapter_words) {
            if *words as f64 > cfg.imbalance_factor * average
                && *words > u64::from(cfg.imbalance_min_words)
            {
                findings.push(finding(
                    "structure.chapterImbalance",
                    Category::Structure,
                    Severity::Warning,
                    "Chapter imbalance",
                    format!(
                        "Chapter \"{}\" has {} words against an average of {:.0}.",
                        chapter.name, words, average,
                    ),
                    Some(chapter.file_path.as_str()),
                    None,
                    &[],
                    None,
                ));
            }
        }
    }

    // Act imbalance: any act dwarfing the smallest act that has content.
    let mut act_totals: BTreeMap<&str, u64> = BTreeMap::new();
    for (chapter, words) in chapters.iter().zip(&chapter_words) {
        if let Some(act) = chapter.act.as_deref().map(str::trim).filter(|act| !act.is_empty()) {
            *act_totals.entry(act).or_default() += words;
        }
    }
    if act_totals.len() >= 2 {
        if let Some(smallest) = act_totals.values().copied().filter(|total| *total > 0).min() {
            for (&act, total) in &act_totals {
                if *total as f64 > cfg.act_imbalance_factor * smallest as f64 {
                    findings.push(finding(
                        "structure.actImbalance",
                        Category::Structure,
                        Severity::Warning,
                        "Act imbalance",
                        format!(
                            "Act \"{}\" has {} words, more than {}x the smallest act ({}).",
                            act, total, cfg.act_imbalance_factor as u64, smallest,
                        ),
                        None,
                        None,
                        &[act],
                        None,
                    ));
                }
            }
        }
    }

    // Outline content should not precede finished content.
    let last_final_order = chapters
        .iter()
        .filter(|chapter| chapter.status == ChapterStatus::Final)
        .map(|chapter| chapter.order)
        .max();
    if let Some(final_order) = last_final_order {
        for chapter in &chapters {
            if chapter.status == ChapterStatus::Outline && chapter.order < final_order {
                findings.push(finding(
                    "structure.statusRegression",
                    Category::Structure,
                    Severity::Warning,
                    "Status regression",
                    format!(
                        "Chapter \"{}\" is still an outline but sits before finished chapters.",
                        chapter.name,
                    ),
                    Some(chapter.file_path.as_str()),
                    None,
                    &[],
                    None,
                ));
            }
        }
    }

    findings
}
