use super::catalog::{CatalogSpec, PatternCatalog};
use super::matcher::SceneMatcher;
use crate::error::EngineError;
use crate::models::Category;

fn builtin() -> PatternCatalog {
    PatternCatalog::builtin().unwrap()
}

fn gore_count(catalog: &PatternCatalog, text: &str) -> usize {
    SceneMatcher::new(catalog, 50)
        .find_matches(text, Category::Gore)
        .len()
}

const MINIMAL_YAML: &str = r#"
version: "test-1"
categories:
  violence: { patterns: ['\bpunch\w*'] }
  gore: { patterns: [] }
  sex_act: { patterns: [] }
  nudity: { patterns: [] }
  profanity: { patterns: ['\bheck\b'] }
  drugs: { patterns: [] }
  child_risk: { patterns: [], critical: false }
false_positives: ['punch line']
"#;

#[test]
fn test_builtin_catalog_compiles() {
    let catalog = builtin();
    assert_eq!(catalog.version(), super::BUILTIN_CATALOG_VERSION);
    for category in Category::ALL {
        assert!(!catalog.patterns(category).is_empty(), "{}", category);
    }
    assert!(catalog.is_critical(Category::Gore));
    assert!(!catalog.is_critical(Category::Violence));
}

#[test]
fn test_russian_earlier_and_bed_are_not_gore() {
    let catalog = builtin();
    assert_eq!(gore_count(&catalog, "Раньше он был другим человеком."), 0);
    assert_eq!(gore_count(&catalog, "Он лёг на кровать и уснул."), 0);
    assert_eq!(gore_count(&catalog, "Ранний рассвет над рекой."), 0);
    assert_eq!(gore_count(&catalog, "Устроим мозговой штурм."), 0);
    assert_eq!(gore_count(&catalog, "Они нашли приют под кровом старого дома."), 0);
}

#[test]
fn test_russian_wound_and_blood_are_gore() {
    let catalog = builtin();
    assert_eq!(gore_count(&catalog, "У него рана на руке."), 1);
    assert_eq!(gore_count(&catalog, "Кровь на полу."), 1);
    assert_eq!(gore_count(&catalog, "Он весь в крови, кровавая рубашка."), 2);
    assert_eq!(gore_count(&catalog, "Руки испачканы кровью."), 1);
    assert_eq!(gore_count(&catalog, "Мы нашли следы крови на месте преступления."), 1);
    assert_eq!(gore_count(&catalog, "Бинты пропитаны кровями, руки в кровях."), 2);
}

#[test]
fn test_false_positive_in_window_suppresses_match() {
    let catalog = builtin();
    let matcher = SceneMatcher::new(&catalog, 50);
    let set = matcher.scan("Кровь на кровати.");
    assert_eq!(set.counts().gore, 0);
    assert_eq!(set.suppressed.gore, 1);

    assert!(matcher.find_matches("That was a long shot, he said.", Category::Violence).is_empty());
    assert_eq!(matcher.find_matches("He shot the guard.", Category::Violence).len(), 1);
}

#[test]
fn test_threats_are_not_idioms() {
    let catalog = builtin();
    let matcher = SceneMatcher::new(&catalog, 50);
    let threat = "He is gonna kill him. He kills the guard with a knife and shoots the other.";
    let forms: Vec<String> = matcher
        .find_matches(threat, Category::Violence)
        .into_iter()
        .map(|m| m.text)
        .collect();
    assert_eq!(forms, vec!["kill", "kills", "knife", "shoots"]);

    assert!(matcher.find_matches("We're gonna kill time at the mall.", Category::Violence).is_empty());
    assert!(matcher.find_matches("This song is gonna kill it tonight.", Category::Violence).is_empty());
    assert!(matcher.find_matches("Stop it, you're killing me!", Category::Violence).is_empty());
}

#[test]
fn test_bare_sex_word_skips_idioms() {
    let catalog = builtin();
    let matcher = SceneMatcher::new(&catalog, 50);
    assert_eq!(matcher.find_matches("They have sex in the car.", Category::SexAct).len(), 2);
    assert!(matcher.find_matches("She glances at the opposite sex.", Category::SexAct).is_empty());
    assert!(matcher.find_matches("Sex education class starts.", Category::SexAct).is_empty());
}

#[test]
fn test_matching_is_case_insensitive_across_alphabets() {
    let catalog = builtin();
    let matches = catalog.match_category("BLOOD everywhere. КРОВЬ повсюду.", Category::Gore);
    let forms: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(forms, vec!["BLOOD", "КРОВЬ"]);
    assert!(matches.iter().all(|m| m.line_number == 1));
}

#[test]
fn test_match_category_does_not_filter() {
    let catalog = builtin();
    assert_eq!(catalog.match_category("Кровь на кровати.", Category::Gore).len(), 1);
}

#[test]
fn test_yaml_catalog() {
    let spec = CatalogSpec::from_yaml_str(MINIMAL_YAML).unwrap();
    let catalog = PatternCatalog::compile(spec).unwrap();
    assert_eq!(catalog.version(), "test-1");
    assert_eq!(catalog.pattern_count(), 2);
    assert!(!catalog.is_critical(Category::ChildRisk));
    assert!(catalog.is_critical(Category::SexAct));

    let matcher = SceneMatcher::new(&catalog, 50);
    assert_eq!(matcher.find_matches("He punches the wall.", Category::Violence).len(), 1);
    assert!(matcher.find_matches("Great punch line.", Category::Violence).is_empty());
    assert!(matcher.find_matches("Blood!", Category::Gore).is_empty());
}

#[test]
fn test_malformed_pattern_is_configuration_error() {
    let yaml = MINIMAL_YAML.replace(r"\bheck\b", "(unclosed");
    let spec = CatalogSpec::from_yaml_str(&yaml).unwrap();
    let err = PatternCatalog::compile(spec).unwrap_err();
    assert!(err.is_configuration());
    match err {
        EngineError::InvalidPattern { section, pattern, .. } => {
            assert_eq!(section, "profanity");
            assert_eq!(pattern, "(unclosed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_false_positive_names_the_pattern() {
    let yaml = MINIMAL_YAML.replace("'punch line'", "'punch line', '[oops'");
    let spec = CatalogSpec::from_yaml_str(&yaml).unwrap();
    match PatternCatalog::compile(spec).unwrap_err() {
        EngineError::InvalidPattern { section, pattern, .. } => {
            assert_eq!(section, "false_positives");
            assert_eq!(pattern, "[oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_category_is_rejected() {
    let yaml = MINIMAL_YAML.replace("  drugs: { patterns: [] }\n", "");
    assert!(matches!(
        CatalogSpec::from_yaml_str(&yaml),
        Err(EngineError::Yaml { .. })
    ));
}
