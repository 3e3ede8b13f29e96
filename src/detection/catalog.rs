//! Pattern catalog: declarative `CatalogSpec` data and its compiled form.
//!
//! A [`CatalogSpec`] is plain data (the built-in tables or a YAML file). It is
//! compiled exactly once into a [`PatternCatalog`], which is read-only from
//! then on and is shared between engines and threads behind an `Arc`.
//!
//! All patterns compile case-insensitive and Unicode-aware, so matching runs
//! on the original text and byte offsets stay valid for excerpts.

use std::fs;
use std::ops::Range;
use std::path::Path;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::{Category, PerCategory};

use super::matcher::{LineIndex, Match, excerpt_around};
use super::patterns;

/// Default character window on each side of a match.
pub const DEFAULT_EXCERPT_WINDOW: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Use the steep normalization curve. Falls back to [`Category::is_critical`].
    #[serde(default)]
    pub critical: Option<bool>,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextSpec {
    #[serde(default)]
    pub child_mentions: Vec<String>,
    #[serde(default)]
    pub heroic: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
}

/// Catalog as data. Every category must be present, even if empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub version: String,
    pub categories: PerCategory<CategorySpec>,
    #[serde(default)]
    pub false_positives: Vec<String>,
    #[serde(default)]
    pub context: ContextSpec,
}

impl CatalogSpec {
    pub fn builtin() -> Self {
        patterns::builtin_spec()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|source| EngineError::Yaml {
            context: "pattern catalog".to_string(),
            source,
        })
    }

    pub fn from_yaml_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&yaml).map_err(|source| EngineError::Yaml {
            context: path.display().to_string(),
            source,
        })
    }
}

#[derive(Debug)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

#[derive(Debug)]
struct CompiledCategory {
    critical: bool,
    patterns: Vec<CompiledPattern>,
}

/// Compiled context-signal pattern sets.
#[derive(Debug)]
pub struct ContextSignals {
    child_mentions: Vec<Regex>,
    heroic: Vec<Regex>,
    intensifiers: Vec<Regex>,
}

impl ContextSignals {
    pub fn count_child_mentions(&self, text: &str) -> usize {
        count_all(&self.child_mentions, text)
    }

    pub fn count_heroic(&self, text: &str) -> usize {
        count_all(&self.heroic, text)
    }

    pub fn count_intensifiers(&self, text: &str) -> usize {
        count_all(&self.intensifiers, text)
    }

    pub fn has_intensifier(&self, text: &str) -> bool {
        self.intensifiers.iter().any(|re| re.is_match(text))
    }
}

fn count_all(regexes: &[Regex], text: &str) -> usize {
    regexes.iter().map(|re| re.find_iter(text).count()).sum()
}

/// One raw occurrence of a category pattern, before false-positive checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub pattern_index: usize,
    pub span: Range<usize>,
}

/// Compiled, immutable pattern catalog.
#[derive(Debug)]
pub struct PatternCatalog {
    version: String,
    categories: PerCategory<CompiledCategory>,
    false_positives: RegexSet,
    context: ContextSignals,
}

impl PatternCatalog {
    /// Compile the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::compile(CatalogSpec::builtin())
    }

    pub fn compile(spec: CatalogSpec) -> Result<Self> {
        let categories = PerCategory::try_from_fn(|category| {
            let category_spec = spec.categories.get(category);
            let patterns = category_spec
                .patterns
                .iter()
                .map(|source| {
                    Ok(CompiledPattern {
                        source: source.clone(),
                        regex: build_regex(category.as_str(), source)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok::<_, EngineError>(CompiledCategory {
                critical: category_spec.critical.unwrap_or_else(|| category.is_critical()),
                patterns,
            })
        })?;

        let false_positives = RegexSetBuilder::new(&spec.false_positives)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                let pattern = spec
                    .false_positives
                    .iter()
                    .find(|p| build_regex("false_positives", p).is_err())
                    .cloned()
                    .unwrap_or_default();
                EngineError::InvalidPattern {
                    section: "false_positives".to_string(),
                    pattern,
                    reason: e.to_string(),
                }
            })?;

        let context = ContextSignals {
            child_mentions: build_all("context.child_mentions", &spec.context.child_mentions)?,
            heroic: build_all("context.heroic", &spec.context.heroic)?,
            intensifiers: build_all("context.intensifiers", &spec.context.intensifiers)?,
        };

        let catalog = Self {
            version: spec.version,
            categories,
            false_positives,
            context,
        };
        log::info!(
            "Compiled pattern catalog {}: {} category patterns, {} false-positive rules",
            catalog.version,
            catalog.pattern_count(),
            catalog.false_positives.len()
        );
        Ok(catalog)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn patterns(&self, category: Category) -> &[CompiledPattern] {
        &self.categories.get(category).patterns
    }

    pub fn is_critical(&self, category: Category) -> bool {
        self.categories.get(category).critical
    }

    pub fn criticality(&self) -> PerCategory<bool> {
        PerCategory::from_fn(|c| self.is_critical(c))
    }

    pub fn pattern_count(&self) -> usize {
        Category::ALL
            .iter()
            .map(|c| self.categories.get(*c).patterns.len())
            .sum()
    }

    pub fn context(&self) -> &ContextSignals {
        &self.context
    }

    /// Whether any false-positive rule matches `excerpt`.
    pub fn is_false_positive(&self, excerpt: &str) -> bool {
        self.false_positives.is_match(excerpt)
    }

    /// Raw non-overlapping occurrences of each pattern of `category`, in
    /// pattern order. No false-positive filtering.
    pub fn occurrences<'a>(
        &'a self,
        text: &'a str,
        category: Category,
    ) -> impl Iterator<Item = Occurrence> + 'a {
        self.patterns(category)
            .iter()
            .enumerate()
            .flat_map(move |(pattern_index, pattern)| {
                pattern.regex.find_iter(text).map(move |m| Occurrence {
                    pattern_index,
                    span: m.range(),
                })
            })
    }

    /// Every occurrence of `category` in `text` as a [`Match`], ordered by
    /// position. False-positive rules are not applied here; see
    /// [`SceneMatcher`](super::matcher::SceneMatcher) for filtered matching.
    pub fn match_category(&self, text: &str, category: Category) -> Vec<Match> {
        let index = LineIndex::new(text);
        let mut matches: Vec<Match> = self
            .occurrences(text, category)
            .map(|occ| Match {
                category,
                pattern_index: occ.pattern_index,
                text: text[occ.span.clone()].to_string(),
                line_number: index.line_of(occ.span.start),
                excerpt: excerpt_around(text, &occ.span, DEFAULT_EXCERPT_WINDOW).to_string(),
                span: occ.span,
            })
            .collect();
        matches.sort_by_key(|m| (m.span.start, m.pattern_index));
        matches
    }
}

fn build_regex(section: &str, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| EngineError::InvalidPattern {
            section: section.to_string(),
            pattern: source.to_string(),
            reason: e.to_string(),
        })
}

fn build_all(section: &str, sources: &[String]) -> Result<Vec<Regex>> {
    sources.iter().map(|s| build_regex(section, s)).collect()
}
