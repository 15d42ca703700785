//! Timeline rules — missing dates, order violations, long gaps, duplicates.

use std::collections::BTreeMap;

use storylint_core::{Category, ChapterInfo, Severity, ValidatorConfig, ValidatorFinding, ValidatorInput};

use super::{finding, sorted_chapters};
use crate::dates::parse_story_date;

pub fn detect(input: &ValidatorInput, cfg: &ValidatorConfig) -> Vec<ValidatorFinding> {
    let chapters = sorted_chapters(input);
    let mut findings = Vec::new();

    // Chapters that parse keep their day ordinal; the rest only count for
    // the missing-date rule.
    let mut dated: Vec<(&ChapterInfo, i64)> = Vec::new();
    for chapter in &chapters {
        let raw = chapter.date.as_deref().map(str::trim).filter(|date| !date.is_empty());
        match raw {
            None => findings.push(finding(
                "timeline.missingDate",
                Category::Timeline,
                Severity::Info,
                "Missing date",
                format!("Chapter \"{}\" has no date.", chapter.name),
                Some(chapter.file_path.as_str()),
                None,
                &[],
                None,
            )),
            Some(raw) => match parse_story_date(raw) {
                Some(days) => dated.push((chapter, days)),
                None => findings.push(finding(
                    "timeline.missingDate",
                    Category::Timeline,
                    Severity::Info,
                    "Missing date",
                    format!(
                        "Chapter \"{}\" has a date (\"{}\") that could not be understood.",
                        chapter.name, raw
                    ),
                    Some(chapter.file_path.as_str()),
                    None,
                    &[],
                    None,
                )),
            },
        }
    }

    for pair in dated.windows(2) {
        let (prev, prev_days) = pair[0];
        let (current, current_days) = pair[1];

        if current_days < prev_days {
            findings.push(finding(
                "timeline.dateOrder",
                Category::Timeline,
                Severity::Warning,
                "Date order violation",
                format!(
                    "Chapter \"{}\" ({}) is dated before the preceding chapter \"{}\" ({}).",
                    current.name,
                    current.date.as_deref().unwrap_or(""),
                    prev.name,
                    prev.date.as_deref().unwrap_or(""),
                ),
                Some(current.file_path.as_str()),
                None,
                &[],
                None,
            ));
        }

        if current_days - prev_days > cfg.date_gap_days {
            findings.push(finding(
                "timeline.dateGap",
                Category::Timeline,
                Severity::Warning,
                "Long time gap",
                format!(
                    "{} days pass between chapter \"{}\" and chapter \"{}\".",
                    current_days - prev_days,
                    prev.name,
                    current.name,
                ),
                Some(current.file_path.as_str()),
                None,
                &[],
                None,
            ));
        }
    }

    // BTreeMap keeps duplicate groups in ascending date order.
    let mut by_day: BTreeMap<i64, Vec<&ChapterInfo>> = BTreeMap::new();
    for &(chapter, days) in &dated {
        by_day.entry(days).or_default().push(chapter);
    }
    for group in by_day.values().filter(|group| group.len() >= 2) {
        let names: Vec<&str> = group.iter().map(|chapter| chapter.name.as_str()).collect();
        let shared = group[0].date.as_deref().unwrap_or("").trim();
        findings.push(finding(
            "timeline.sameDate",
            Category::Timeline,
            Severity::Info,
            "Chapters share a date",
            format!("{} chapters are set on \"{}\": {}.", group.len(), shared, names.join(", ")),
            None,
            None,
            &names,
            Some(shared),
        ));
    }

    findings
}
