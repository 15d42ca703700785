//! Plotline rules — abandoned threads, late introductions, unbalanced spread.
//!
//! Plotlines are inferred from per-scene tags; the rules need a minimum
//! number of chapters before percentile positions mean anything.

use std::collections::BTreeMap;

use storylint_core::{Category, Severity, ValidatorConfig, ValidatorFinding, ValidatorInput};

use super::{finding, sorted_chapters};

#[derive(Default)]
struct TagUse {
    /// Chapter positions (in sorted order) where the tag appears, deduped.
    positions: Vec<usize>,
    /// File of the first chapter using the tag.
    first_file: String,
    /// File of the last chapter using the tag.
    last_file: String,
    /// Tagged scenes carrying this tag.
    scene_count: usize,
}

pub fn detect(input: &ValidatorInput, cfg: &ValidatorConfig) -> Vec<ValidatorFinding> {
    let chapters = sorted_chapters(input);
    let total = chapters.len();
    if total < cfg.plotline_min_chapters {
        return Vec::new();
    }

    let mut tags: BTreeMap<String, TagUse> = BTreeMap::new();
    let mut tagged_scenes = 0usize;

    for (position, chapter) in chapters.iter().enumerate() {
        let Some(stats) = input.scene_stats.get(&chapter.file_path) else {
            continue;
        };
        for scene in &chapter.scenes {
            let Some(meta) = stats.scenes.get(scene) else {
                continue;
            };
            if !meta.tags.is_empty() {
                tagged_scenes += 1;
            }
            for tag in &meta.tags {
                let usage = tags.entry(tag.clone()).or_default();
                if usage.positions.last() != Some(&position) {
                    usage.positions.push(position);
                }
                if usage.first_file.is_empty() {
                    usage.first_file = chapter.file_path.clone();
                }
                usage.last_file = chapter.file_path.clone();
                usage.scene_count += 1;
            }
        }
    }

    let abandoned_cutoff = (total as f64 * cfg.abandoned_percentile).floor() as usize;
    let late_cutoff = (total as f64 * cfg.late_intro_percentile).floor() as usize;

    let mut findings = Vec::new();
    for (tag, usage) in &tags {
        if usage.positions.len() < 2 {
            continue;
        }
        let first = usage.positions[0];
        let last = *usage.positions.last().unwrap_or(&first);

        if first <= abandoned_cutoff && last < abandoned_cutoff {
            findings.push(finding(
                "plotlines.abandoned",
                Category::Plotlines,
                Severity::Warning,
                "Abandoned plotline",
                format!(
                    "The \"{}\" thread last appears in chapter {} of {} and is never resolved.",
                    tag,
                    last + 1,
                    total,
                ),
                Some(usage.last_file.as_str()),
                None,
                &[tag.as_str()],
                None,
            ));
        }

        if first >= late_cutoff {
            findings.push(finding(
                "plotlines.lateIntro",
                Category::Plotlines,
                Severity::Info,
                "Late plotline introduction",
                format!(
                    "The \"{}\" thread only starts in chapter {} of {}.",
                    tag,
                    first + 1,
                    total,
                ),
                Some(usage.first_file.as_str()),
                None,
                &[tag.as_str()],
                None,
            ));
        }
    }

    if tags.len() >= 2 && tagged_scenes > 0 {
        for (tag, usage) in &tags {
            if usage.scene_count as f64 > cfg.tag_dominance * tagged_scenes as f64 {
                findings.push(finding(
                    "plotlines.unbalanced",
                    Category::Plotlines,
                    Severity::Warning,
                    "Unbalanced plotlines",
                    format!(
                        "The \"{}\" thread carries {} of {} tagged scenes.",
                        tag, usage.scene_count, tagged_scenes,
                    ),
                    None,
                    None,
                    &[tag.as_str()],
                    None,
                ));
            }
        }
    }

    findings
}
