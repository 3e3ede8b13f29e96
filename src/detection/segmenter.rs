//! Scene segmentation.
//!
//! A line starting with a scene-heading marker (`INT.`, `EXT.`, `FADE`, or a
//! Russian equivalent) opens a new scene; every following line up to the next
//! heading belongs to it. Text before the first heading becomes a synthetic
//! `scene_0` if it has any non-whitespace content, and is dropped otherwise.
//! A script without headings is therefore one synthetic scene.

use std::iter::{Enumerate, Peekable};
use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static SCENE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:INT\.|EXT\.|INT\s*/\s*EXT\.?|I/E\.|FADE\b|ИНТ\.|НАТ\.|ЭКСТ\.|ИНТЕРЬЕР\b|НАТУРА\b)")
        .unwrap()
});

pub fn is_scene_heading(line: &str) -> bool {
    SCENE_HEADING_RE.is_match(line)
}

/// 1-based inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }

    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// 0-based ordinal.
    pub id: usize,
    /// Heading line, or `scene_N` for synthetic scenes.
    pub heading: String,
    /// Full scene text, heading line included.
    pub text: String,
    pub line_range: LineRange,
    pub synthetic: bool,
}

impl Scene {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Convert a 1-based line number within the scene text to a script line.
    pub fn script_line(&self, scene_line: usize) -> usize {
        self.line_range.start + scene_line.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SceneSegmenter;

impl SceneSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Lazily split `text` into scenes. Each call starts from scratch.
    pub fn segment<'a>(&self, text: &'a str) -> Scenes<'a> {
        Scenes {
            lines: text.lines().enumerate().peekable(),
            next_id: 0,
        }
    }
}

/// Iterator over the scenes of one script.
#[derive(Debug, Clone)]
pub struct Scenes<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
    next_id: usize,
}

impl Iterator for Scenes<'_> {
    type Item = Scene;

    fn next(&mut self) -> Option<Scene> {
        loop {
            let (first_idx, first_line) = self.lines.next()?;
            let synthetic = !is_scene_heading(first_line);

            let mut body = vec![first_line];
            let mut last_idx = first_idx;
            while let Some(&(idx, line)) = self.lines.peek() {
                if is_scene_heading(line) {
                    break;
                }
                body.push(line);
                last_idx = idx;
                self.lines.next();
            }

            // Only the preamble can be synthetic; blank preambles are dropped.
            if synthetic && body.iter().all(|line| line.trim().is_empty()) {
                continue;
            }

            let id = self.next_id;
            self.next_id += 1;
            let heading = if synthetic {
                format!("scene_{}", id)
            } else {
                first_line.trim().to_string()
            };
            return Some(Scene {
                id,
                heading,
                text: body.join("\n"),
                line_range: LineRange {
                    start: first_idx + 1,
                    end: last_idx + 1,
                },
                synthetic,
            });
        }
    }
}
