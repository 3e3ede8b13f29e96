//! Scene text matching with false-positive suppression.
//!
//! For each pattern of a category, every non-overlapping occurrence is taken
//! together with a symmetric character window around it. If any
//! false-positive rule matches inside that window the occurrence is dropped
//! entirely. Every surviving occurrence counts; per-line de-duplication of
//! lexical forms only happens in line mode ([`super::lines`]).

use std::ops::Range;

use serde::Serialize;

use crate::models::{Category, CategoryCounts};

use super::catalog::PatternCatalog;

/// A single category hit. Transient: consumed by scoring and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub category: Category,
    /// Index of the pattern within its category.
    pub pattern_index: usize,
    /// Matched text as it appears in the source.
    pub text: String,
    /// Byte span within the scanned text.
    #[serde(skip)]
    pub span: Range<usize>,
    /// 1-based line number within the scanned text.
    pub line_number: usize,
    pub excerpt: String,
}

/// Byte offsets of line starts, for offset to line-number lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line containing byte `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset).max(1)
    }
}

/// Slice of `text` extending `window` characters on each side of `span`,
/// trimmed of surrounding whitespace.
pub fn excerpt_around<'a>(text: &'a str, span: &Range<usize>, window: usize) -> &'a str {
    let from = text[..span.start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(span.start, |(i, _)| i);
    let to = text[span.end..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(i, _)| span.end + i);
    text[from..to].trim()
}

/// All surviving matches of one scan plus the number of suppressed
/// occurrences per category.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    pub matches: Vec<Match>,
    pub suppressed: CategoryCounts,
}

impl MatchSet {
    pub fn counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for m in &self.matches {
            *counts.get_mut(m.category) += 1;
        }
        counts
    }

    pub fn of(&self, category: Category) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.category == category)
    }
}

/// Matcher bound to a compiled catalog and an excerpt window.
#[derive(Debug, Clone, Copy)]
pub struct SceneMatcher<'c> {
    catalog: &'c PatternCatalog,
    window: usize,
}

impl<'c> SceneMatcher<'c> {
    pub fn new(catalog: &'c PatternCatalog, window: usize) -> Self {
        Self { catalog, window }
    }

    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    /// Surviving matches of `category` in `text`, ordered by position.
    pub fn find_matches(&self, text: &str, category: Category) -> Vec<Match> {
        let index = LineIndex::new(text);
        self.scan_category(text, category, &index).0
    }

    /// Scan `text` for every category.
    pub fn scan(&self, text: &str) -> MatchSet {
        let index = LineIndex::new(text);
        let mut set = MatchSet::default();
        for category in Category::ALL {
            let (matches, suppressed) = self.scan_category(text, category, &index);
            set.matches.extend(matches);
            *set.suppressed.get_mut(category) = suppressed;
        }
        if set.suppressed.total() > 0 {
            log::debug!(
                "Suppressed {} false-positive occurrences",
                set.suppressed.total()
            );
        }
        set
    }

    fn scan_category(
        &self,
        text: &str,
        category: Category,
        index: &LineIndex,
    ) -> (Vec<Match>, usize) {
        let mut suppressed = 0;
        let mut matches = Vec::new();
        for occ in self.catalog.occurrences(text, category) {
            let excerpt = excerpt_around(text, &occ.span, self.window);
            if self.catalog.is_false_positive(excerpt) {
                suppressed += 1;
                continue;
            }
            matches.push(Match {
                category,
                pattern_index: occ.pattern_index,
                text: text[occ.span.clone()].to_string(),
                line_number: index.line_of(occ.span.start),
                excerpt: excerpt.to_string(),
                span: occ.span,
            });
        }
        matches.sort_by_key(|m| (m.span.start, m.pattern_index));
        (matches, suppressed)
    }
}
