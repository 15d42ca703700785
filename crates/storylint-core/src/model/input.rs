//! Validator input bundle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{AiFinding, ChapterInfo, ChapterSceneStats, MentionCacheEntry};
use crate::errors::StorylintError;
use crate::findings::DismissedFinding;

/// Everything one validation run consumes, assembled by the host from its
/// vault caches. The engine never performs I/O; this is the whole boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidatorInput {
    /// All chapters, in any order; rules sort by `order`.
    pub chapters: Vec<ChapterInfo>,
    /// Chapter file path -> per-scene statistics.
    pub scene_stats: HashMap<String, ChapterSceneStats>,
    /// Chapter file path -> mention cache.
    pub mentions: HashMap<String, MentionCacheEntry>,
    /// Findings the user has dismissed; matched by fingerprint.
    pub dismissed: Vec<DismissedFinding>,
    /// Cross-chapter AI findings from a whole-story analysis pass.
    pub whole_story_analysis: Option<Vec<AiFinding>>,
    /// Character name -> total words across the manuscript, when the host
    /// tracks it. Accepted for forward compatibility; no current rule reads it.
    pub character_word_counts: Option<HashMap<String, u64>>,
}

impl ValidatorInput {
    /// Deserialize an input bundle from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, StorylintError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to JSON, mostly useful for fixtures and debugging.
    pub fn to_json(&self) -> Result<String, StorylintError> {
        Ok(serde_json::to_string(self)?)
    }
}
