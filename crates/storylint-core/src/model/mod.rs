//! Manuscript data model — chapters, scene metadata, mention caches, and the
//! validator input bundle.
//!
//! These shapes mirror what the host editor persists as JSON; every field is
//! `#[serde(default)]`-friendly so partially populated caches still load.

mod chapter;
mod input;
mod mentions;
mod scene;

pub use chapter::{ChapterInfo, ChapterStatus};
pub use input::ValidatorInput;
pub use mentions::{AiFinding, MentionCacheEntry, MentionSets};
pub use scene::{ChapterSceneStats, SceneMetadata};
