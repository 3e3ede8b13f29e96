//! Ordered decision table from script scores to a rating.
//!
//! Rules are evaluated top to bottom and the first that holds sets the
//! rating. Reasons are collected from every rule that holds, in table order,
//! naming each threshold that was crossed. Ratings never increase down the
//! table, which makes the mapping monotone in every score.

use serde::Serialize;

use crate::models::{Category, CategoryScores, Rating};

#[derive(Debug, Clone, Copy)]
enum Condition {
    AtLeast(Category, f64),
    Above(Category, f64),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

use Category::*;
use Condition::*;

impl Condition {
    fn holds(&self, scores: &CategoryScores) -> bool {
        match self {
            AtLeast(category, threshold) => *scores.get(*category) >= *threshold,
            Above(category, threshold) => *scores.get(*category) > *threshold,
            All(conditions) => conditions.iter().all(|c| c.holds(scores)),
            Any(conditions) => conditions.iter().any(|c| c.holds(scores)),
        }
    }

    /// Leaf comparisons that make this (holding) condition hold.
    fn crossed(&self, scores: &CategoryScores, out: &mut Vec<(Category, &'static str, f64)>) {
        match self {
            AtLeast(category, threshold) => out.push((*category, ">=", *threshold)),
            Above(category, threshold) => out.push((*category, ">", *threshold)),
            All(conditions) | Any(conditions) => {
                for c in conditions.iter().filter(|c| c.holds(scores)) {
                    c.crossed(scores, out);
                }
            }
        }
    }
}

struct Rule {
    rating: Rating,
    condition: Condition,
}

static DECISION_TABLE: &[Rule] = &[
    Rule {
        rating: Rating::EighteenPlus,
        condition: Any(&[AtLeast(SexAct, 0.75), AtLeast(Gore, 0.95)]),
    },
    Rule {
        rating: Rating::EighteenPlus,
        condition: All(&[
            Above(ChildRisk, 0.7),
            Any(&[AtLeast(SexAct, 0.5), AtLeast(Violence, 0.8)]),
        ]),
    },
    Rule {
        rating: Rating::SixteenPlus,
        condition: Any(&[
            All(&[AtLeast(Violence, 0.8), AtLeast(Gore, 0.7)]),
            AtLeast(Gore, 0.75),
        ]),
    },
    Rule {
        rating: Rating::SixteenPlus,
        condition: Any(&[AtLeast(Violence, 0.65), AtLeast(Gore, 0.5)]),
    },
    Rule {
        rating: Rating::SixteenPlus,
        condition: Any(&[AtLeast(SexAct, 0.35), AtLeast(Nudity, 0.4)]),
    },
    Rule {
        rating: Rating::TwelvePlus,
        condition: Any(&[
            AtLeast(Violence, 0.3),
            AtLeast(Profanity, 0.4),
            AtLeast(Drugs, 0.3),
        ]),
    },
    Rule {
        rating: Rating::SixPlus,
        condition: Any(&[AtLeast(Violence, 0.1), AtLeast(Profanity, 0.1)]),
    },
];

pub const NO_THRESHOLD_REASON: &str = "no category reached the 6+ thresholds";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingDecision {
    pub rating: Rating,
    pub reasons: Vec<String>,
}

/// Map script scores to a rating with reasons.
pub fn map_rating(scores: &CategoryScores) -> RatingDecision {
    let mut rating = None;
    let mut reasons: Vec<String> = Vec::new();

    for rule in DECISION_TABLE {
        if !rule.condition.holds(scores) {
            continue;
        }
        rating.get_or_insert(rule.rating);

        let mut crossed = Vec::new();
        rule.condition.crossed(scores, &mut crossed);
        for (category, op, threshold) in crossed {
            let reason = format!(
                "{} score {:.2} {} {} ({})",
                category,
                scores.get(category),
                op,
                threshold,
                rule.rating
            );
            if !reasons.contains(&reason) {
                reasons.push(reason);
            }
        }
    }

    match rating {
        Some(rating) => RatingDecision { rating, reasons },
        None => RatingDecision {
            rating: Rating::ZeroPlus,
            reasons: vec![NO_THRESHOLD_REASON.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(Category, f64)]) -> CategoryScores {
        let mut s = CategoryScores::default();
        for (c, v) in pairs {
            *s.get_mut(*c) = *v;
        }
        s
    }

    #[test]
    fn test_table_is_non_increasing() {
        assert!(DECISION_TABLE.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(map_rating(&scores(&[(SexAct, 0.75)])).rating, Rating::EighteenPlus);
        assert_eq!(map_rating(&scores(&[(Gore, 0.95)])).rating, Rating::EighteenPlus);
        assert_eq!(
            map_rating(&scores(&[(ChildRisk, 0.71), (SexAct, 0.5)])).rating,
            Rating::EighteenPlus
        );
        assert_eq!(
            map_rating(&scores(&[(Violence, 0.8), (Gore, 0.7)])).rating,
            Rating::SixteenPlus
        );
        assert_eq!(map_rating(&scores(&[(Gore, 0.5)])).rating, Rating::SixteenPlus);
        assert_eq!(map_rating(&scores(&[(Nudity, 0.4)])).rating, Rating::SixteenPlus);
        assert_eq!(map_rating(&scores(&[(Drugs, 0.3)])).rating, Rating::TwelvePlus);
        assert_eq!(map_rating(&scores(&[(Profanity, 0.1)])).rating, Rating::SixPlus);
        assert_eq!(map_rating(&scores(&[(Nudity, 0.39)])).rating, Rating::ZeroPlus);
    }

    #[test]
    fn test_child_risk_threshold_is_strict() {
        let at = scores(&[(ChildRisk, 0.7), (Violence, 0.8)]);
        assert_eq!(map_rating(&at).rating, Rating::SixteenPlus);
        let above = scores(&[(ChildRisk, 0.7001), (Violence, 0.8)]);
        assert_eq!(map_rating(&above).rating, Rating::EighteenPlus);
    }

    #[test]
    fn test_child_risk_alone_does_not_rate() {
        assert_eq!(map_rating(&scores(&[(ChildRisk, 1.3)])).rating, Rating::ZeroPlus);
    }

    #[test]
    fn test_reasons_name_crossed_thresholds() {
        let decision = map_rating(&scores(&[(Gore, 0.96), (Violence, 0.4)]));
        assert_eq!(decision.rating, Rating::EighteenPlus);
        assert_eq!(decision.reasons[0], "gore score 0.96 >= 0.95 (18+)");
        assert!(decision.reasons.contains(&"violence score 0.40 >= 0.3 (12+)".to_string()));
        assert!(decision.reasons.iter().all(|r| !r.starts_with("sex_act")));
    }

    #[test]
    fn test_zero_plus_reason() {
        let decision = map_rating(&CategoryScores::default());
        assert_eq!(decision.rating, Rating::ZeroPlus);
        assert_eq!(decision.reasons, vec![NO_THRESHOLD_REASON.to_string()]);
    }

    #[test]
    fn test_monotone_in_every_category() {
        let steps: Vec<f64> = (0..=20).map(|i| i as f64 * 0.05).collect();
        let bases = [
            CategoryScores::default(),
            scores(&[(ChildRisk, 0.8), (Violence, 0.5)]),
            scores(&[(Violence, 0.7), (Gore, 0.6), (SexAct, 0.2)]),
            scores(&[(Profanity, 0.3), (Drugs, 0.2), (Nudity, 0.3)]),
        ];
        for base in bases {
            for category in Category::ALL {
                let mut previous = Rating::ZeroPlus;
                for step in &steps {
                    let mut s = base;
                    *s.get_mut(category) = *step;
                    let rating = map_rating(&s).rating;
                    assert!(rating >= previous, "{} at {}", category, step);
                    previous = rating;
                }
            }
        }
    }
}
