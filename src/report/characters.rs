//! Per-character content statistics.
//!
//! Speakers come from cue lines and inline `NAME:` lines. Each dialogue
//! block is scanned with the same catalog and false-positive rules as scene
//! scoring; a block with any violence, sex or drug match counts once for that
//! category.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::detection::{
    LineKind, SceneMatcher, SceneSegmenter, classify_lines, cue_name, inline_dialogue,
};
use crate::models::Category;

const PROBLEM_TAGS: [&str; 4] = ["violence", "sex", "drugs", "profanity"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterStats {
    pub name: String,
    pub dialogue_blocks: usize,
    pub profanity_count: usize,
    pub violence_scenes: usize,
    pub sex_scenes: usize,
    pub drug_scenes: usize,
    pub total_problematic_scenes: usize,
    /// Scene id to sorted tags (`appearance`, `violence`, `sex`, `drugs`, `profanity`).
    pub scene_appearances: BTreeMap<usize, Vec<String>>,
    pub severity_score: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Default)]
struct Tally {
    dialogue_blocks: usize,
    profanity_count: usize,
    violence_scenes: usize,
    sex_scenes: usize,
    drug_scenes: usize,
    scenes: BTreeMap<usize, BTreeSet<&'static str>>,
}

impl Tally {
    fn into_stats(self, name: String) -> CharacterStats {
        let total_problematic_scenes = self
            .scenes
            .values()
            .filter(|tags| PROBLEM_TAGS.iter().any(|t| tags.contains(t)))
            .count();
        let severity_score = self.profanity_count as f64 * 0.1
            + self.violence_scenes as f64 * 0.3
            + self.sex_scenes as f64 * 0.4
            + self.drug_scenes as f64 * 0.3;
        let recommendations = recommendations(
            &name,
            self.profanity_count,
            self.violence_scenes,
            self.sex_scenes,
            self.drug_scenes,
        );
        CharacterStats {
            dialogue_blocks: self.dialogue_blocks,
            profanity_count: self.profanity_count,
            violence_scenes: self.violence_scenes,
            sex_scenes: self.sex_scenes,
            drug_scenes: self.drug_scenes,
            total_problematic_scenes,
            scene_appearances: self
                .scenes
                .into_iter()
                .map(|(id, tags)| (id, tags.into_iter().map(str::to_string).collect()))
                .collect(),
            severity_score,
            recommendations,
            name,
        }
    }
}

fn recommendations(
    name: &str,
    profanity: usize,
    violence: usize,
    sex: usize,
    drugs: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    if profanity > 10 {
        out.push(format!("Reduce profanity for {} ({} instances)", name, profanity));
    } else if profanity > 5 {
        out.push(format!(
            "Consider softening language for {} ({} instances)",
            name, profanity
        ));
    }
    if violence > 3 {
        out.push(format!(
            "Reduce violent scenes involving {} ({} scenes)",
            name, violence
        ));
    }
    if sex > 1 {
        out.push(format!(
            "Consider reducing sexual content for {} ({} scenes)",
            name, sex
        ));
    }
    if drugs > 2 {
        out.push(format!(
            "Reduce drug-related scenes for {} ({} scenes)",
            name, drugs
        ));
    }
    if out.is_empty() {
        out.push(format!("{} has minimal problematic content", name));
    }
    out
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct Walker<'m, 'c> {
    matcher: &'m SceneMatcher<'c>,
    tallies: BTreeMap<String, Tally>,
    speaker: Option<String>,
    buffer: Vec<String>,
    scene_id: usize,
}

impl Walker<'_, '_> {
    fn start(&mut self, name: &str) {
        self.flush();
        let name = normalize_name(name);
        self.tallies
            .entry(name.clone())
            .or_default()
            .scenes
            .entry(self.scene_id)
            .or_default()
            .insert("appearance");
        self.speaker = Some(name);
    }

    fn flush(&mut self) {
        let Some(speaker) = self.speaker.take() else {
            return;
        };
        if self.buffer.is_empty() {
            return;
        }
        let text = self.buffer.join(" ");
        self.buffer.clear();

        let set = self.matcher.scan(&text);
        let tally = self.tallies.entry(speaker).or_default();
        let tags = tally.scenes.entry(self.scene_id).or_default();
        tally.dialogue_blocks += 1;

        let profanity = set.of(Category::Profanity).count();
        if profanity > 0 {
            tally.profanity_count += profanity;
            tags.insert("profanity");
        }
        if set.of(Category::Violence).next().is_some() {
            tally.violence_scenes += 1;
            tags.insert("violence");
        }
        if set.of(Category::SexAct).next().is_some() {
            tally.sex_scenes += 1;
            tags.insert("sex");
        }
        if set.of(Category::Drugs).next().is_some() {
            tally.drug_scenes += 1;
            tags.insert("drugs");
        }
    }
}

/// Statistics for every speaking character, most problematic first.
pub fn analyze_characters(
    segmenter: &SceneSegmenter,
    matcher: &SceneMatcher<'_>,
    text: &str,
) -> Vec<CharacterStats> {
    let mut walker = Walker {
        matcher,
        tallies: BTreeMap::new(),
        speaker: None,
        buffer: Vec::new(),
        scene_id: 0,
    };

    for scene in segmenter.segment(text) {
        walker.flush();
        walker.scene_id = scene.id;
        let lines: Vec<&str> = scene.text.lines().collect();
        let kinds = classify_lines(lines.iter().copied());
        let mut in_block = false;

        for (line, kind) in lines.iter().zip(kinds) {
            let trimmed = line.trim();
            match kind {
                LineKind::Cue => {
                    if let Some(name) = cue_name(trimmed) {
                        walker.start(name);
                        in_block = true;
                    }
                }
                LineKind::Dialogue if in_block => walker.buffer.push(trimmed.to_string()),
                LineKind::Dialogue => {
                    if let Some((name, spoken)) = inline_dialogue(trimmed) {
                        walker.start(name);
                        walker.buffer.push(spoken.to_string());
                        walker.flush();
                    }
                }
                LineKind::Parenthetical => {}
                _ => {
                    walker.flush();
                    in_block = false;
                }
            }
        }
    }
    walker.flush();

    let mut stats: Vec<CharacterStats> = walker
        .tallies
        .into_iter()
        .map(|(name, tally)| tally.into_stats(name))
        .collect();
    stats.sort_by(|a, b| {
        b.severity_score
            .total_cmp(&a.severity_score)
            .then_with(|| a.name.cmp(&b.name))
    });
    stats
}

/// The `limit` most problematic characters.
pub fn top_offenders(stats: &[CharacterStats], limit: usize) -> &[CharacterStats] {
    &stats[..limit.min(stats.len())]
}
