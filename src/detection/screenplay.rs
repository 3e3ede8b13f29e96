//! Screenplay line classification.
//!
//! Classifies each line of a script or scene so that words spoken by a
//! character can be told apart from action written to be shown on screen.
//!
//! A character cue is an all-caps name of at most three words on its own
//! line, optionally followed by an extension such as `(V.O.)`. It opens a
//! block only after a blank line, a heading or another speaker's lines, so
//! capitalised action (`A SHOT RINGS OUT.`) stays action. Lines after a cue
//! are dialogue until a blank line; `(parentheticals)` inside a dialogue
//! block are kept separate. `NAME: text` on a single line is inline dialogue.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::segmenter::is_scene_heading;

static CUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-ZА-ЯЁ][A-ZА-ЯЁ0-9 .'\-]{0,38}?)\s*(?:\([^)]*\))?\s*$").unwrap()
});

static INLINE_DIALOGUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-ZА-ЯЁ][A-ZА-ЯЁ .'\-]{0,38}?)\s*(?:\([^)]*\))?\s*:\s*(\S.*)$").unwrap()
});

const MAX_CUE_WORDS: usize = 3;

const ARTICLES: [&str; 3] = ["A", "AN", "THE"];

static TRANSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-ZА-ЯЁ ]+ TO:|CUT TO BLACK\.?|FADE TO BLACK\.?|ЗТМ\.?|СМЕНА КАДРА\.?)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Blank,
    Heading,
    Transition,
    Cue,
    Parenthetical,
    Dialogue,
    Action,
}

impl LineKind {
    /// Spoken by a character rather than shown on screen.
    pub fn is_spoken(&self) -> bool {
        matches!(self, Self::Dialogue | Self::Parenthetical)
    }
}

/// Character name of a cue line, without extension.
pub fn cue_name(line: &str) -> Option<&str> {
    let caps = CUE_RE.captures(line.trim())?;
    let raw = caps.get(1)?.as_str().trim_end();
    // "DR. SMITH" is a name, "IT IS OVER." is a sentence
    if raw.ends_with('.') && raw.contains(' ') {
        return None;
    }
    let name = raw.trim_end_matches(['.', ' ']);
    if name
        .split_whitespace()
        .next()
        .is_some_and(|first| ARTICLES.contains(&first))
    {
        return None;
    }
    if name.split_whitespace().count() > MAX_CUE_WORDS {
        return None;
    }
    (name.chars().filter(|c| c.is_alphabetic()).count() >= 2).then_some(name)
}

fn opens_dialogue(previous: LineKind) -> bool {
    matches!(
        previous,
        LineKind::Blank | LineKind::Heading | LineKind::Dialogue | LineKind::Parenthetical
    )
}

/// Speaker and spoken text of an inline `NAME: text` line.
pub fn inline_dialogue(line: &str) -> Option<(&str, &str)> {
    let caps = INLINE_DIALOGUE_RE.captures(line.trim())?;
    let name = caps.get(1)?.as_str().trim();
    if name.chars().filter(|c| c.is_alphabetic()).count() < 2 {
        return None;
    }
    Some((name, caps.get(2)?.as_str()))
}

fn is_transition(trimmed: &str) -> bool {
    TRANSITION_RE.is_match(trimmed)
}

/// Classify every line, in order.
pub fn classify_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<LineKind> {
    let mut kinds = Vec::new();
    let mut in_dialogue = false;
    let mut previous = LineKind::Blank;

    for line in lines {
        let trimmed = line.trim();
        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if is_scene_heading(trimmed) {
            LineKind::Heading
        } else if is_transition(trimmed) {
            LineKind::Transition
        } else if in_dialogue && trimmed.starts_with('(') {
            LineKind::Parenthetical
        } else if opens_dialogue(previous) && cue_name(trimmed).is_some() {
            LineKind::Cue
        } else if in_dialogue || inline_dialogue(trimmed).is_some() {
            LineKind::Dialogue
        } else {
            LineKind::Action
        };

        in_dialogue = match kind {
            LineKind::Cue | LineKind::Parenthetical => true,
            LineKind::Dialogue => in_dialogue,
            _ => false,
        };
        previous = kind;
        kinds.push(kind);
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Vec<LineKind> {
        classify_lines(text.lines())
    }

    #[test]
    fn test_standard_screenplay_block() {
        let text = "INT. POLICE STATION - DAY\n\
                    The detective sits at the desk.\n\
                    \n\
                    DETECTIVE\n\
                    (quietly)\n\
                    We found traces of blood.\n\
                    \n\
                    CUT TO:";
        use LineKind::*;
        assert_eq!(
            classify(text),
            vec![Heading, Action, Blank, Cue, Parenthetical, Dialogue, Blank, Transition]
        );
    }

    #[test]
    fn test_consecutive_cues_without_blank_lines() {
        let text = "ЛЁША\nНадо сообщить взрослым!\nСОНЯ\nНо у нас нет доказательств.";
        use LineKind::*;
        assert_eq!(classify(text), vec![Cue, Dialogue, Cue, Dialogue]);
    }

    #[test]
    fn test_inline_dialogue() {
        assert_eq!(
            inline_dialogue("JOHN: Put the gun down."),
            Some(("JOHN", "Put the gun down."))
        );
        assert_eq!(inline_dialogue("Note: this is action"), None);
        let text = "JOHN: Put the gun down.\nHe walks away.";
        assert_eq!(classify(text), vec![LineKind::Dialogue, LineKind::Action]);
    }

    #[test]
    fn test_cue_extensions() {
        assert_eq!(cue_name("MARY (V.O.)"), Some("MARY"));
        assert_eq!(cue_name("  DR. SMITH  "), Some("DR. SMITH"));
        assert_eq!(cue_name("Mary walks in."), None);
        assert_eq!(cue_name("I"), None);
        assert_eq!(cue_name("BANG!"), None);
    }

    #[test]
    fn test_capitalised_action_is_not_a_cue() {
        assert_eq!(cue_name("A SHOT RINGS OUT"), None);
        assert_eq!(cue_name("THE DOOR SLAMS SHUT"), None);
        assert_eq!(cue_name("SILENCE FALLS OVER EVERYONE"), None);
        assert_eq!(cue_name("IT IS OVER."), None);
        assert_eq!(cue_name("OLD MAN"), Some("OLD MAN"));
        assert_eq!(cue_name("ОФИЦЕР ПОЛИЦИИ (З.К.)"), Some("ОФИЦЕР ПОЛИЦИИ"));

        use LineKind::*;
        let text = "EXT. ALLEY - NIGHT\n\nA SHOT RINGS OUT\nHe stabs the guard. Blood sprays.";
        assert_eq!(classify(text), vec![Heading, Blank, Action, Action]);
    }

    #[test]
    fn test_cue_needs_a_break_before_it() {
        use LineKind::*;
        let text = "The van stops.\nBOOM\nSmoke fills the street.";
        assert_eq!(classify(text), vec![Action, Action, Action]);
    }

    #[test]
    fn test_mixed_case_prose_is_action() {
        let text = "Убийца достает нож.\nЖертва кричит.";
        assert_eq!(classify(text), vec![LineKind::Action, LineKind::Action]);
    }
}
