//! Line-level findings.
//!
//! One finding per (line, category) that has at least one surviving match.
//! Unlike scene scoring, repeated identical words on a line count once: the
//! finding records distinct lower-cased lexical forms.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, CategoryCounts, Rating};

use super::matcher::SceneMatcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextLine {
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineFinding {
    pub line_number: usize,
    pub line_text: String,
    pub category: Category,
    /// Distinct matched forms, lower-cased, in order of first appearance.
    pub matched_forms: Vec<String>,
    pub match_count: usize,
    pub severity: f64,
    pub rating_impact: Rating,
    pub context_before: Vec<ContextLine>,
    pub context_after: Vec<ContextLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineStatistics {
    pub total_findings: usize,
    pub findings_by_category: CategoryCounts,
    pub matches_by_category: CategoryCounts,
    pub lines_with_findings: usize,
    pub max_severity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineReport {
    pub total_lines: usize,
    pub context_lines: usize,
    pub findings: Vec<LineFinding>,
    pub statistics: LineStatistics,
}

impl LineReport {
    pub fn findings_for(&self, category: Category) -> impl Iterator<Item = &LineFinding> {
        self.findings.iter().filter(move |f| f.category == category)
    }
}

fn base_severity(category: Category) -> f64 {
    match category {
        Category::Profanity => 0.3,
        Category::Violence => 0.5,
        Category::Gore => 0.6,
        Category::Drugs => 0.4,
        Category::SexAct => 0.7,
        Category::Nudity => 0.5,
        Category::ChildRisk => 0.9,
    }
}

/// Ascending `(min_count, rating)` thresholds for a single line.
fn rating_thresholds(category: Category) -> &'static [(usize, Rating)] {
    use Rating::*;
    match category {
        Category::Profanity => {
            &[(1, SixPlus), (3, TwelvePlus), (5, SixteenPlus), (10, EighteenPlus)]
        }
        Category::Violence => &[(1, SixPlus), (2, TwelvePlus), (4, SixteenPlus), (8, EighteenPlus)],
        Category::Gore | Category::SexAct => &[(1, SixteenPlus), (2, EighteenPlus)],
        Category::Nudity | Category::Drugs => {
            &[(1, TwelvePlus), (3, SixteenPlus), (5, EighteenPlus)]
        }
        Category::ChildRisk => &[(1, EighteenPlus)],
    }
}

pub fn line_severity(category: Category, match_count: usize, intensified: bool) -> f64 {
    let count_bonus = (0.1 * match_count as f64).min(0.3);
    let intensity_bonus = if intensified { 0.2 } else { 0.0 };
    (base_severity(category) + count_bonus + intensity_bonus).min(1.0)
}

pub fn rating_impact(category: Category, match_count: usize) -> Rating {
    rating_thresholds(category)
        .iter()
        .rev()
        .find(|(min_count, _)| match_count >= *min_count)
        .map_or(Rating::ZeroPlus, |(_, rating)| *rating)
}

/// Analyse `text` line by line with `context_lines` of context on each side.
pub fn analyze_lines(matcher: &SceneMatcher<'_>, text: &str, context_lines: usize) -> LineReport {
    let lines: Vec<&str> = text.lines().collect();
    let matches = matcher.scan(text);

    // (line, category) -> distinct forms
    let mut grouped: BTreeMap<(usize, Category), Vec<String>> = BTreeMap::new();
    for m in &matches.matches {
        let form = m.text.to_lowercase();
        let forms = grouped.entry((m.line_number, m.category)).or_default();
        if !forms.contains(&form) {
            forms.push(form);
        }
    }

    let context = matcher.catalog().context();
    let context_line = |idx: usize| ContextLine {
        line_number: idx + 1,
        text: lines[idx].trim().to_string(),
    };

    let findings: Vec<LineFinding> = grouped
        .into_iter()
        .filter(|((line_number, _), _)| *line_number <= lines.len())
        .map(|((line_number, category), matched_forms)| {
            let idx = line_number - 1;
            let line = lines[idx];
            let match_count = matched_forms.len();
            let before_start = idx.saturating_sub(context_lines);
            let after_end = (idx + 1 + context_lines).min(lines.len());
            LineFinding {
                line_number,
                line_text: line.trim().to_string(),
                category,
                match_count,
                severity: line_severity(category, match_count, context.has_intensifier(line)),
                rating_impact: rating_impact(category, match_count),
                matched_forms,
                context_before: (before_start..idx).map(context_line).collect(),
                context_after: (idx + 1..after_end).map(context_line).collect(),
            }
        })
        .collect();

    let statistics = summarize(&findings);
    LineReport {
        total_lines: lines.len(),
        context_lines,
        findings,
        statistics,
    }
}

fn summarize(findings: &[LineFinding]) -> LineStatistics {
    let mut findings_by_category = CategoryCounts::default();
    let mut matches_by_category = CategoryCounts::default();
    let mut lines = Vec::new();
    let mut max_severity: f64 = 0.0;
    for finding in findings {
        *findings_by_category.get_mut(finding.category) += 1;
        *matches_by_category.get_mut(finding.category) += finding.match_count;
        if lines.last() != Some(&finding.line_number) {
            lines.push(finding.line_number);
        }
        max_severity = max_severity.max(finding.severity);
    }
    LineStatistics {
        total_findings: findings.len(),
        findings_by_category,
        matches_by_category,
        lines_with_findings: lines.len(),
        max_severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_severity_caps() {
        assert!((line_severity(Category::Profanity, 1, false) - 0.4).abs() < 1e-9);
        assert!((line_severity(Category::Violence, 5, false) - 0.8).abs() < 1e-9);
        assert_eq!(line_severity(Category::ChildRisk, 3, true), 1.0);
    }

    #[test]
    fn test_rating_impact_thresholds() {
        assert_eq!(rating_impact(Category::Profanity, 0), Rating::ZeroPlus);
        assert_eq!(rating_impact(Category::Profanity, 4), Rating::TwelvePlus);
        assert_eq!(rating_impact(Category::Profanity, 10), Rating::EighteenPlus);
        assert_eq!(rating_impact(Category::Violence, 2), Rating::TwelvePlus);
        assert_eq!(rating_impact(Category::Gore, 1), Rating::SixteenPlus);
        assert_eq!(rating_impact(Category::Nudity, 3), Rating::SixteenPlus);
        assert_eq!(rating_impact(Category::ChildRisk, 1), Rating::EighteenPlus);
    }
}
