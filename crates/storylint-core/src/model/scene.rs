//! Per-scene metadata cache.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata recorded for a single scene.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneMetadata {
    /// Word count of the scene body.
    pub word_count: u32,
    /// Narrative intensity on a 0-10 scale.
    pub intensity: Option<f64>,
    /// Categorical emotion label.
    pub emotion: Option<String>,
    /// Fraction of the scene that is dialogue, 0-1.
    pub dialogue_ratio: Option<f64>,
    /// Point-of-view character.
    pub pov: Option<String>,
    /// Plot-thread tags attached to the scene.
    pub tags: Vec<String>,
}

/// Per-chapter scene statistics, keyed by scene name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChapterSceneStats {
    /// Scene name -> metadata.
    pub scenes: HashMap<String, SceneMetadata>,
    /// Aggregated chapter word count as recorded by the host.
    pub total_words: u32,
}
