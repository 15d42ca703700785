//! Mention caches and AI-sourced findings.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::findings::Severity;

/// Sets of entity names mentioned in a chapter or scene.
///
/// `BTreeSet` keeps iteration order stable, which keeps finding order and
/// fingerprints deterministic across runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MentionSets {
    pub characters: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub items: BTreeSet<String>,
    pub lore: BTreeSet<String>,
}

impl MentionSets {
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
            && self.locations.is_empty()
            && self.items.is_empty()
            && self.lore.is_empty()
    }
}

/// A finding produced by an external AI analysis pass.
///
/// Merged into the continuity category; the deterministic rules never
/// produce these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiFinding {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    /// Scene the observation is anchored to, if any.
    #[serde(default)]
    pub scene_name: Option<String>,
    /// Entities the observation involves.
    #[serde(default)]
    pub entities: Vec<String>,
}

/// Per-chapter mention cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MentionCacheEntry {
    /// Chapter-level mentions (not anchored to a scene).
    pub chapter: MentionSets,
    /// Scene name -> mentions within that scene.
    pub scenes: HashMap<String, MentionSets>,
    /// AI findings for this chapter from the last analysis pass.
    pub ai_findings: Vec<AiFinding>,
}
