//! Character rules — orphans, abrupt introductions, long absences, missing POV.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use storylint_core::{Category, Severity, ValidatorConfig, ValidatorFinding, ValidatorInput};

use super::{finding, sorted_chapters};

/// Where one character appears across the manuscript, in chapter order.
#[derive(Default)]
struct CharacterArc {
    /// One entry per chapter the character appears in: (position in the
    /// sorted chapter list, chapter order, chapter file path).
    chapters: Vec<(usize, i64, String)>,
    /// Unique (file path, scene name) appearances.
    scenes: Vec<(String, String)>,
}

impl CharacterArc {
    fn record_chapter(&mut self, position: usize, order: i64, file_path: &str) {
        if self.chapters.last().map(|(p, _, _)| *p) != Some(position) {
            self.chapters.push((position, order, file_path.to_string()));
        }
    }

    fn record_scene(&mut self, file_path: &str, scene: &str) {
        let key = (file_path.to_string(), scene.to_string());
        if !self.scenes.contains(&key) {
            self.scenes.push(key);
        }
    }
}

pub fn detect(input: &ValidatorInput, cfg: &ValidatorConfig) -> Vec<ValidatorFinding> {
    let chapters = sorted_chapters(input);
    let total = chapters.len();

    // BTreeMap so characters are visited in name order, run after run.
    let mut arcs: BTreeMap<String, CharacterArc> = BTreeMap::new();
    let mut pov_names: FxHashSet<&str> = FxHashSet::default();

    for (position, chapter) in chapters.iter().enumerate() {
        if let Some(stats) = input.scene_stats.get(&chapter.file_path) {
            for scene in &chapter.scenes {
                if let Some(pov) = stats.scenes.get(scene).and_then(|meta| meta.pov.as_deref()) {
                    pov_names.insert(pov);
                }
            }
        }

        let Some(entry) = input.mentions.get(&chapter.file_path) else {
            continue;
        };
        for name in &entry.chapter.characters {
            arcs.entry(name.clone()).or_default().record_chapter(
                position,
                chapter.order,
                &chapter.file_path,
            );
        }
        for scene in &chapter.scenes {
            let Some(scene_mentions) = entry.scenes.get(scene) else {
                continue;
            };
            for name in &scene_mentions.characters {
                let arc = arcs.entry(name.clone()).or_default();
                arc.record_chapter(position, chapter.order, &chapter.file_path);
                arc.record_scene(&chapter.file_path, scene);
            }
        }
    }

    let order_range = match (chapters.first(), chapters.last()) {
        (Some(first), Some(last)) => last.order - first.order,
        _ => 0,
    };
    let intro_cutoff = (total as f64 * cfg.abrupt_intro_percentile).floor() as usize;

    let mut findings = Vec::new();
    for (name, arc) in &arcs {
        if arc.scenes.len() == 1 {
            let (file_path, scene) = &arc.scenes[0];
            findings.push(finding(
                "characters.orphan",
                Category::Characters,
                Severity::Warning,
                "Orphan character",
                format!("\"{}\" appears in only one scene (\"{}\").", name, scene),
                Some(file_path.as_str()),
                Some(scene.as_str()),
                &[name.as_str()],
                None,
            ));
        }

        if total >= cfg.min_chapters_for_arcs {
            if let Some((first_position, _, first_file)) = arc.chapters.first() {
                if *first_position > intro_cutoff {
                    findings.push(finding(
                        "characters.abruptIntro",
                        Category::Characters,
                        Severity::Warning,
                        "Late character introduction",
                        format!(
                            "\"{}\" first appears in chapter {} of {}, well past the opening.",
                            name,
                            first_position + 1,
                            total,
                        ),
                        Some(first_file.as_str()),
                        None,
                        &[name.as_str()],
                        None,
                    ));
                }
            }

            if order_range > 0 {
                for window in arc.chapters.windows(2) {
                    let (_, prev_order, _) = &window[0];
                    let (_, next_order, next_file) = &window[1];
                    let gap = next_order - prev_order;
                    if gap as f64 > cfg.long_absence_ratio * order_range as f64 {
                        let span = format!("{}-{}", prev_order, next_order);
                        findings.push(finding(
                            "characters.longAbsence",
                            Category::Characters,
                            Severity::Warning,
                            "Long character absence",
                            format!(
                                "\"{}\" is absent for {} chapters before returning.",
                                name, gap
                            ),
                            Some(next_file.as_str()),
                            None,
                            &[name.as_str()],
                            Some(span.as_str()),
                        ));
                    }
                }
            }
        }

        if arc.scenes.len() >= cfg.no_pov_min_scenes && !pov_names.contains(name.as_str()) {
            findings.push(finding(
                "characters.noPov",
                Category::Characters,
                Severity::Info,
                "Never a POV character",
                format!(
                    "\"{}\" appears in {} scenes but never narrates one.",
                    name,
                    arc.scenes.len(),
                ),
                None,
                None,
                &[name.as_str()],
                None,
            ));
        }
    }

    findings
}
