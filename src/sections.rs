//! Best-effort splitting of generated recipe text into display sections.
//!
//! Every section has its own rule and each rule looks at the whole text on
//! its own, taking the first match. Rules never see each other's results, so
//! boundaries can overlap (a "Notes:" line ahead of "Tips:" ends up in the
//! tips). A rule that matches nothing leaves its section empty.

use crate::model::{RecipeSections, SectionKind};
use log::error;
use regex::Regex;
use std::sync::OnceLock;

/// Characters scanned after a time line when looking for the end of the time block.
const TIME_WINDOW_CHARS: usize = 200;

/// How a section is located, before compilation.
#[derive(Debug, Clone, Copy)]
enum RuleDef {
    FirstLine,
    LineWindow { pattern: &'static str, window: usize },
    Line { pattern: &'static str },
    Capture { pattern: &'static str, group: usize },
}

const RULES: [(SectionKind, RuleDef); 7] = [
    (SectionKind::Title, RuleDef::FirstLine),
    (
        SectionKind::Time,
        RuleDef::LineWindow {
            pattern: r"(Prep|Preparation|Cook|Total) [Tt]ime:.*",
            window: TIME_WINDOW_CHARS,
        },
    ),
    (
        SectionKind::Servings,
        RuleDef::Line {
            pattern: r"Serv(ing|ings|es):.*",
        },
    ),
    (
        SectionKind::Ingredients,
        RuleDef::Capture {
            pattern: r"(?is)Ingredients:(.*?)(Instructions|Directions|Steps|Method)",
            group: 1,
        },
    ),
    (
        SectionKind::Instructions,
        RuleDef::Capture {
            pattern: r"(?is)(Instructions|Directions|Steps|Method):(.*?)(Nutrition|Tips|Notes|$)",
            group: 2,
        },
    ),
    (
        SectionKind::Nutrition,
        RuleDef::Capture {
            pattern: r"(?is)Nutrition(al)? [Ii]nformation:(.*?)(Tips|Notes|$)",
            group: 2,
        },
    ),
    (
        SectionKind::Tips,
        RuleDef::Capture {
            pattern: r"(?is)(Tips|Notes):(.*?)($)",
            group: 2,
        },
    ),
];

/// A compiled section rule.
#[derive(Debug)]
enum MatchRule {
    /// The first line, with surrounding '#' and whitespace removed
    FirstLine,
    /// The first matching line, extended to the next blank line if one
    /// starts within `window` characters of the match
    LineWindow { pattern: Regex, window: usize },
    /// The first matching line as-is
    Line { pattern: Regex },
    /// One capture group of the first match
    Capture { pattern: Regex, group: usize },
}

impl MatchRule {
    fn compile(def: RuleDef) -> Result<Self, regex::Error> {
        Ok(match def {
            RuleDef::FirstLine => MatchRule::FirstLine,
            RuleDef::LineWindow { pattern, window } => MatchRule::LineWindow {
                pattern: Regex::new(pattern)?,
                window,
            },
            RuleDef::Line { pattern } => MatchRule::Line {
                pattern: Regex::new(pattern)?,
            },
            RuleDef::Capture { pattern, group } => MatchRule::Capture {
                pattern: Regex::new(pattern)?,
                group,
            },
        })
    }

    fn apply(&self, text: &str) -> Option<String> {
        match self {
            MatchRule::FirstLine => {
                let first = text.split('\n').next().unwrap_or_default();
                Some(first.trim_matches(['#', ' ']).trim().to_string())
            }
            MatchRule::LineWindow { pattern, window } => {
                let m = pattern.find(text)?;
                let section = take_chars(&text[m.start()..], *window);
                match section.find("\n\n") {
                    Some(end) if end > 0 => Some(section[..end].trim().to_string()),
                    _ => Some(m.as_str().trim().to_string()),
                }
            }
            MatchRule::Line { pattern } => {
                pattern.find(text).map(|m| m.as_str().trim().to_string())
            }
            MatchRule::Capture { pattern, group } => pattern
                .captures(text)
                .and_then(|caps| caps.get(*group))
                .map(|g| g.as_str().trim().to_string()),
        }
    }
}

/// The first `n` characters of `s`.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn rules() -> &'static [(SectionKind, MatchRule)] {
    static COMPILED: OnceLock<Vec<(SectionKind, MatchRule)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .filter_map(|(kind, def)| match MatchRule::compile(*def) {
                Ok(rule) => Some((*kind, rule)),
                Err(e) => {
                    error!("Invalid pattern for {:?} section: {}", kind, e);
                    None
                }
            })
            .collect()
    })
}

/// Split generated recipe text into sections.
///
/// Never fails. Sections that cannot be found are left empty, and the same
/// input always gives the same output.
pub fn parse_sections(text: &str) -> RecipeSections {
    let mut sections = RecipeSections::default();
    for (kind, rule) in rules() {
        if let Some(value) = rule.apply(text) {
            sections.set(*kind, value);
        }
    }
    sections
}

impl RecipeSections {
    /// See [`parse_sections`].
    pub fn parse(text: &str) -> Self {
        parse_sections(text)
    }
}
