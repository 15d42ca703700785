//! Chapter model.

use serde::{Deserialize, Serialize};

/// Editorial status of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    Outline,
    #[default]
    Draft,
    Revised,
    Final,
    /// Unrecognized status in persisted JSON; never flagged by rules.
    #[serde(other)]
    Unknown,
}

/// One chapter of the manuscript.
///
/// `order` is the canonical sequencing key for every progression heuristic.
/// Chapters with equal orders keep their input order (stable sort downstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterInfo {
    /// Stable chapter identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Integer position in the manuscript.
    pub order: i64,
    /// Editorial status.
    #[serde(default)]
    pub status: ChapterStatus,
    /// Free-text act grouping label.
    #[serde(default)]
    pub act: Option<String>,
    /// Free-text in-story date, loosely parsed by the timeline rules.
    #[serde(default)]
    pub date: Option<String>,
    /// Vault path of the chapter note; keys the scene/mention caches.
    pub file_path: String,
    /// Ordered scene names within the chapter.
    #[serde(default)]
    pub scenes: Vec<String>,
}
