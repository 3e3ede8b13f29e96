//! IMDb-style parents guide.

use serde::Serialize;

use crate::detection::LineReport;
use crate::models::{Category, Rating, ScriptAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Gradation {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Gradation {
    pub fn from_score(score: f64) -> Self {
        if score <= 0.0 {
            Self::None
        } else if score < 0.3 {
            Self::Mild
        } else if score < 0.6 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideEntry {
    pub category: Category,
    pub label: &'static str,
    pub gradation: Gradation,
    pub score: f64,
    /// Line findings in this category.
    pub episodes: usize,
    pub percentage_of_lines: f64,
    /// Highest per-line match count.
    pub top_match_count: usize,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentsGuide {
    pub rating: Rating,
    pub total_lines: usize,
    pub entries: Vec<GuideEntry>,
}

impl ParentsGuide {
    pub fn entry(&self, category: Category) -> Option<&GuideEntry> {
        self.entries.iter().find(|e| e.category == category)
    }
}

fn description(category: Category, gradation: Gradation, episodes: usize) -> String {
    use Category::*;
    use Gradation::*;
    let text = match (category, gradation) {
        (_, None) => return format!("No notable content ({} instances)", episodes),
        (Violence, Severe) => "Multiple scenes with graphic violence and weapons",
        (Violence, Moderate) => "Several instances of action violence",
        (Violence, Mild) => "Occasional violence in action context",
        (Gore, Severe) => "Graphic depictions of blood and injury",
        (Gore, Moderate) => "Some bloody violence",
        (Gore, Mild) => "Brief moments with blood",
        (Profanity, Severe) => "Pervasive use of strong language throughout",
        (Profanity, Moderate) => "Frequent profanity in dialogue",
        (Profanity, Mild) => "Occasional mild profanity",
        (Drugs, Severe) => "Extensive drug use and abuse depicted",
        (Drugs, Moderate) => "Several scenes involving substance use",
        (Drugs, Mild) => "Brief references to alcohol or smoking",
        (SexAct, Severe) => "Explicit sexual content",
        (SexAct, Moderate) => "Sexual situations and innuendo",
        (SexAct, Mild) => "Brief sexual references",
        (Nudity, Severe) => "Extensive nudity throughout",
        (Nudity, Moderate) => "Several scenes with partial nudity",
        (Nudity, Mild) => "Brief partial nudity",
        (ChildRisk, Severe) => "Intense scenes involving children in danger",
        (ChildRisk, Moderate) => "Some scenes may be frightening for children",
        (ChildRisk, Mild) => "Mild peril involving children",
    };
    format!("{} ({} instances)", text, episodes)
}

/// Build the guide from the script scores and its line findings.
pub fn build_parents_guide(analysis: &ScriptAnalysis, lines: &LineReport) -> ParentsGuide {
    let entries = Category::ALL
        .into_iter()
        .map(|category| {
            let score = *analysis.display_scores.get(category);
            let gradation = Gradation::from_score(score);
            let episodes = lines.findings_for(category).count();
            let top_match_count = lines
                .findings_for(category)
                .map(|f| f.match_count)
                .max()
                .unwrap_or(0);
            let percentage_of_lines = if lines.total_lines == 0 {
                0.0
            } else {
                (episodes as f64 / lines.total_lines as f64 * 10_000.0).round() / 100.0
            };
            GuideEntry {
                category,
                label: category.guide_label(),
                gradation,
                score,
                episodes,
                percentage_of_lines,
                top_match_count,
                description: description(category, gradation, episodes),
            }
        })
        .collect();

    ParentsGuide {
        rating: analysis.predicted_rating,
        total_lines: lines.total_lines,
        entries,
    }
}
