use super::catalog::PatternCatalog;
use super::lines::analyze_lines;
use super::matcher::{LineIndex, SceneMatcher, excerpt_around};
use crate::models::{Category, Rating};

#[test]
fn test_excerpt_window_counts_characters_not_bytes() {
    let text = "абвгд blood еёжзи";
    let start = text.find("blood").unwrap();
    let span = start..start + "blood".len();
    assert_eq!(excerpt_around(text, &span, 3), "гд blood её");
    assert_eq!(excerpt_around(text, &span, 0), "blood");
    assert_eq!(excerpt_around(text, &span, 100), text);
}

#[test]
fn test_line_index() {
    let index = LineIndex::new("one\ntwo\n\nfour");
    assert_eq!(index.line_of(0), 1);
    assert_eq!(index.line_of(3), 1);
    assert_eq!(index.line_of(4), 2);
    assert_eq!(index.line_of(8), 3);
    assert_eq!(index.line_of(9), 4);
}

#[test]
fn test_every_surviving_occurrence_counts_in_scene_mode() {
    let catalog = PatternCatalog::builtin().unwrap();
    let matcher = SceneMatcher::new(&catalog, 50);
    let matches = matcher.find_matches("Blood. Blood. More blood.\nBlood again.", Category::Gore);
    assert_eq!(matches.len(), 4);
    assert_eq!(
        matches.iter().map(|m| m.line_number).collect::<Vec<_>>(),
        vec![1, 1, 1, 2]
    );
    assert!(matches.windows(2).all(|w| w[0].span.start < w[1].span.start));
}

#[test]
fn test_narrow_window_misses_distant_false_positive() {
    let catalog = PatternCatalog::builtin().unwrap();
    let text = "Кровь капает на пол старого дома, а дальше в углу стоит кровать.";
    let wide = SceneMatcher::new(&catalog, 80);
    let narrow = SceneMatcher::new(&catalog, 10);
    assert!(wide.find_matches(text, Category::Gore).is_empty());
    assert_eq!(narrow.find_matches(text, Category::Gore).len(), 1);
}

#[test]
fn test_line_mode_counts_distinct_forms() {
    let catalog = PatternCatalog::builtin().unwrap();
    let matcher = SceneMatcher::new(&catalog, 50);
    let text = "Damn. DAMN. damn it, hell.";
    let report = analyze_lines(&matcher, text, 3);
    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.category, Category::Profanity);
    assert_eq!(finding.matched_forms, vec!["damn", "hell"]);
    assert_eq!(finding.match_count, 2);
    assert_eq!(finding.rating_impact, Rating::SixPlus);
    assert_eq!(report.statistics.matches_by_category.profanity, 2);
}

#[test]
fn test_line_findings_carry_context() {
    let catalog = PatternCatalog::builtin().unwrap();
    let matcher = SceneMatcher::new(&catalog, 50);
    let text = "line one\nline two\nline three\nHe grabs the knife.\nline five\nline six";
    let report = analyze_lines(&matcher, text, 2);
    assert_eq!(report.total_lines, 6);
    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.line_number, 4);
    assert_eq!(finding.line_text, "He grabs the knife.");
    let before: Vec<usize> = finding.context_before.iter().map(|c| c.line_number).collect();
    let after: Vec<usize> = finding.context_after.iter().map(|c| c.line_number).collect();
    assert_eq!(before, vec![2, 3]);
    assert_eq!(after, vec![5, 6]);
    assert_eq!(finding.context_after[0].text, "line five");
}

#[test]
fn test_context_is_clipped_at_script_edges() {
    let catalog = PatternCatalog::builtin().unwrap();
    let matcher = SceneMatcher::new(&catalog, 50);
    let report = analyze_lines(&matcher, "Blood on the floor.\nQuiet.", 3);
    let finding = &report.findings[0];
    assert!(finding.context_before.is_empty());
    assert_eq!(finding.context_after.len(), 1);
}

#[test]
fn test_intensifier_raises_line_severity() {
    let catalog = PatternCatalog::builtin().unwrap();
    let matcher = SceneMatcher::new(&catalog, 50);
    let plain = analyze_lines(&matcher, "He grabs the knife.", 0);
    let intense = analyze_lines(&matcher, "He grabs the knife, brutal.", 0);
    let plain_violence = plain.findings_for(Category::Violence).next().unwrap();
    let intense_violence = intense.findings_for(Category::Violence).next().unwrap();
    assert!((plain_violence.severity - 0.6).abs() < 1e-9);
    assert!((intense_violence.severity - 0.8).abs() < 1e-9);
}

#[test]
fn test_findings_ordered_by_line_then_category() {
    let catalog = PatternCatalog::builtin().unwrap();
    let matcher = SceneMatcher::new(&catalog, 50);
    let text = "Damn, blood and a knife.\nCocaine on the table.";
    let report = analyze_lines(&matcher, text, 0);
    let order: Vec<(usize, Category)> = report
        .findings
        .iter()
        .map(|f| (f.line_number, f.category))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, Category::Violence),
            (1, Category::Gore),
            (1, Category::Profanity),
            (2, Category::Drugs),
        ]
    );
    assert_eq!(report.statistics.lines_with_findings, 2);
}
