//! Validator configuration.
//!
//! Every threshold the rule battery uses, with the product defaults baked
//! into `Default`. The values are empirically chosen product behavior, not
//! algorithmic necessity; hosts may override individual fields via JSON
//! (`#[serde(default)]` fills the rest).

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the validator rule battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Days between consecutive dated chapters before a gap is flagged. Default: 90.
    pub date_gap_days: i64,

    /// Fraction of the chapter list a character may skip before their first
    /// appearance counts as abrupt. Default: 0.30.
    pub abrupt_intro_percentile: f64,
    /// Fraction of the order range an appearance gap must exceed to count as
    /// a long absence. Default: 0.40.
    pub long_absence_ratio: f64,
    /// Minimum chapters before arc-position rules (abrupt intro, long
    /// absence) run. Default: 5.
    pub min_chapters_for_arcs: usize,
    /// Distinct scenes a character must appear in before a missing POV is
    /// noted. Default: 5.
    pub no_pov_min_scenes: usize,

    /// Minimum chapters before any plotline rule runs. Default: 4.
    pub plotline_min_chapters: usize,
    /// Percentile cutoff for the abandoned-plotline rule. Default: 0.70.
    pub abandoned_percentile: f64,
    /// Percentile cutoff for the late-introduction rule. Default: 0.80.
    pub late_intro_percentile: f64,
    /// Share of tagged scenes one tag may claim before the spread is
    /// unbalanced. Default: 0.60.
    pub tag_dominance: f64,

    /// Scenes per chapter before the chapter is flagged as overloaded. Default: 15.
    pub max_scenes_per_chapter: usize,
    /// Words under which a scene counts as empty. Default: 20.
    pub min_scene_words: u32,
    /// Multiple of the average word count a chapter must exceed to be
    /// imbalanced. Default: 3.0.
    pub imbalance_factor: f64,
    /// Absolute word floor for the chapter-imbalance rule. Default: 500.
    pub imbalance_min_words: u32,
    /// Multiple of another act's total an act must exceed to be imbalanced.
    /// Default: 3.0.
    pub act_imbalance_factor: f64,

    /// Intensity drop between consecutive scenes that gets flagged. Default: 6.0.
    pub intensity_drop: f64,
    /// Consecutive same-emotion scenes that count as a streak. Default: 5.
    pub emotion_streak_len: usize,
    /// Global intensity range at or under which the arc is flat. Default: 4.0.
    pub flat_arc_range: f64,
    /// Minimum scenes before the flat-arc rule runs. Default: 6.
    pub flat_arc_min_scenes: usize,
    /// Fraction of the story tail searched for a climax. Default: 0.20.
    pub climax_window: f64,
    /// Intensity a scene must reach to count as a climax. Default: 7.0.
    pub climax_intensity: f64,
    /// Minimum scenes before the no-climax rule runs. Default: 5.
    pub climax_min_scenes: usize,
    /// Consecutive low-intensity scenes tolerated before a dry spell is
    /// noted. Default: 5.
    pub dry_spell_len: usize,
    /// Intensity under which a scene counts toward a dry spell. Default: 2.0.
    pub dry_spell_intensity: f64,
    /// Share of scenes that may be dialogue-heavy before the story is. Default: 0.60.
    pub dialogue_heavy_share: f64,
    /// Dialogue ratio above which a scene is dialogue-heavy. Default: 0.70.
    pub dialogue_heavy_ratio: f64,
    /// Minimum scenes before the dialogue-heavy rule runs. Default: 5.
    pub dialogue_min_scenes: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            date_gap_days: 90,
            abrupt_intro_percentile: 0.30,
            long_absence_ratio: 0.40,
            min_chapters_for_arcs: 5,
            no_pov_min_scenes: 5,
            plotline_min_chapters: 4,
            abandoned_percentile: 0.70,
            late_intro_percentile: 0.80,
            tag_dominance: 0.60,
            max_scenes_per_chapter: 15,
            min_scene_words: 20,
            imbalance_factor: 3.0,
            imbalance_min_words: 500,
            act_imbalance_factor: 3.0,
            intensity_drop: 6.0,
            emotion_streak_len: 5,
            flat_arc_range: 4.0,
            flat_arc_min_scenes: 6,
            climax_window: 0.20,
            climax_intensity: 7.0,
            climax_min_scenes: 5,
            dry_spell_len: 5,
            dry_spell_intensity: 2.0,
            dialogue_heavy_share: 0.60,
            dialogue_heavy_ratio: 0.70,
            dialogue_min_scenes: 5,
        }
    }
}
