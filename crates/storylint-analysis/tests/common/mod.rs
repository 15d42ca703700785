//! Shared fixture builders for the validator tests.

#![allow(dead_code)]

use storylint_core::{
    ChapterInfo, ChapterSceneStats, ChapterStatus, MentionCacheEntry, SceneMetadata,
    ValidatorInput,
};

/// A draft chapter with no scenes, dated nothing, in "Act 1".
pub fn chapter(name: &str, order: i64) -> ChapterInfo {
    ChapterInfo {
        id: name.to_string(),
        name: name.to_string(),
        order,
        status: ChapterStatus::Draft,
        act: Some("Act 1".to_string()),
        date: None,
        file_path: format!("chapters/{}.md", name.to_lowercase().replace(' ', "-")),
        scenes: Vec::new(),
    }
}

pub fn scene_meta(word_count: u32, intensity: f64, emotion: &str) -> SceneMetadata {
    SceneMetadata {
        word_count,
        intensity: Some(intensity),
        emotion: if emotion.is_empty() { None } else { Some(emotion.to_string()) },
        dialogue_ratio: None,
        pov: None,
        tags: Vec::new(),
    }
}

/// Append a scene (name + metadata) to the chapter at `index`.
pub fn add_scene(input: &mut ValidatorInput, index: usize, scene: &str, meta: SceneMetadata) {
    let chapter = &mut input.chapters[index];
    chapter.scenes.push(scene.to_string());
    input
        .scene_stats
        .entry(chapter.file_path.clone())
        .or_insert_with(ChapterSceneStats::default)
        .scenes
        .insert(scene.to_string(), meta);
}

/// Record a character mention, scene-level when `scene` is given.
pub fn add_character_mention(
    input: &mut ValidatorInput,
    index: usize,
    scene: Option<&str>,
    name: &str,
) {
    let file_path = input.chapters[index].file_path.clone();
    let entry = input.mentions.entry(file_path).or_insert_with(MentionCacheEntry::default);
    match scene {
        Some(scene) => {
            entry
                .scenes
                .entry(scene.to_string())
                .or_default()
                .characters
                .insert(name.to_string());
        }
        None => {
            entry.chapter.characters.insert(name.to_string());
        }
    }
}

/// Overwrite a chapter's aggregate word count without materializing scenes.
pub fn set_total_words(input: &mut ValidatorInput, index: usize, words: u32) {
    let file_path = input.chapters[index].file_path.clone();
    input
        .scene_stats
        .entry(file_path)
        .or_insert_with(ChapterSceneStats::default)
        .total_words = words;
}

pub fn input_with_chapters(chapters: Vec<ChapterInfo>) -> ValidatorInput {
    ValidatorInput { chapters, ..ValidatorInput::default() }
}
