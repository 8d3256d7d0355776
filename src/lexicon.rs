//! Built-in keyword tables and the matchers compiled from them.

use regex::Regex;

use crate::error::{ResponderError, Result};
use crate::models::Category;

pub const SAD_TRIGGERS: &[&str] = &[
    "sad",
    "lonely",
    "tired",
    "empty",
    "cry",
    "worthless",
    "hopeless",
];

pub const STRESSED_TRIGGERS: &[&str] = &[
    "stressed",
    "stress",
    "overwhelmed",
    "pressure",
    "tension",
    "exam",
    "deadlines",
    "workload",
    "too much work",
];

pub const ANXIOUS_TRIGGERS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "worry",
    "scared",
    "nervous",
    "panic",
    "overthinking",
    "afraid",
];

/// Checked in this order; the first hit decides.
pub const HIGH_RISK_PHRASES: &[&str] = &[
    "i want to die",
    "kill myself",
    "end my life",
    "no reason to live",
    "suicide",
    "i can't do this anymore",
];

/// How lexicon triggers are located inside a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchMode {
    /// Plain containment: "tension" also hits "hypertension".
    #[default]
    Substring,
    /// Triggers must sit between word boundaries.
    Word,
}

#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub category: Category,
    pub triggers: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Triggers are stored lowercased. Neutral entries are ignored since
    /// neutral is never scored.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut cleaned = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.category == Category::Neutral {
                continue;
            }
            let mut triggers = Vec::with_capacity(entry.triggers.len());
            for trigger in entry.triggers {
                let trigger = trigger.trim().to_lowercase();
                if trigger.is_empty() {
                    return Err(ResponderError::EmptyTrigger(entry.category));
                }
                triggers.push(trigger);
            }
            cleaned.push(LexiconEntry {
                category: entry.category,
                triggers,
            });
        }
        Ok(Self { entries: cleaned })
    }

    pub fn builtin() -> Self {
        fn entry(category: Category, triggers: &[&str]) -> LexiconEntry {
            LexiconEntry {
                category,
                triggers: triggers.iter().map(|t| t.to_string()).collect(),
            }
        }

        Self {
            entries: vec![
                entry(Category::Sad, SAD_TRIGGERS),
                entry(Category::Stressed, STRESSED_TRIGGERS),
                entry(Category::Anxious, ANXIOUS_TRIGGERS),
            ],
        }
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn triggers(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.triggers.as_slice())
            .unwrap_or(&[])
    }
}

/// A single compiled trigger.
#[derive(Debug, Clone)]
pub enum Matcher {
    Substring(String),
    Word(Regex),
}

impl Matcher {
    pub fn compile(trigger: &str, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Substring => Ok(Matcher::Substring(trigger.to_lowercase())),
            MatchMode::Word => phrase_regex(trigger).map(Matcher::Word),
        }
    }

    /// `text` must already be lowercased.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Substring(needle) => text.contains(needle.as_str()),
            Matcher::Word(regex) => regex.is_match(text),
        }
    }
}

/// Builds `\bword\s+word\b` for a phrase, case-insensitive.
pub fn phrase_regex(phrase: &str) -> Result<Regex> {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"(?i)\b{body}\b")).map_err(|source| ResponderError::Pattern {
        phrase: phrase.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_scored_category() {
        let lexicon = Lexicon::builtin();
        for category in Category::SCORED {
            assert!(!lexicon.triggers(category).is_empty());
        }
        assert!(lexicon.triggers(Category::Neutral).is_empty());
    }

    #[test]
    fn new_lowercases_and_drops_neutral() {
        let lexicon = Lexicon::new(vec![
            LexiconEntry {
                category: Category::Sad,
                triggers: vec!["  Gloomy ".to_string()],
            },
            LexiconEntry {
                category: Category::Neutral,
                triggers: vec!["fine".to_string()],
            },
        ])
        .unwrap();
        assert_eq!(lexicon.triggers(Category::Sad), ["gloomy".to_string()]);
        assert_eq!(lexicon.entries().len(), 1);
    }

    #[test]
    fn new_rejects_blank_trigger() {
        let err = Lexicon::new(vec![LexiconEntry {
            category: Category::Anxious,
            triggers: vec!["uneasy".to_string(), "   ".to_string()],
        }])
        .unwrap_err();
        assert!(matches!(err, ResponderError::EmptyTrigger(Category::Anxious)));
    }

    #[test]
    fn substring_matcher_hits_inside_words() {
        let matcher = Matcher::compile("tension", MatchMode::Substring).unwrap();
        assert!(matcher.is_match("my hypertension is back"));
        let matcher = Matcher::compile("cry", MatchMode::Substring).unwrap();
        assert!(matcher.is_match("a crystal vase"));
    }

    #[test]
    fn word_matcher_respects_boundaries() {
        let matcher = Matcher::compile("tension", MatchMode::Word).unwrap();
        assert!(!matcher.is_match("my hypertension is back"));
        assert!(matcher.is_match("so much tension, honestly"));
        let matcher = Matcher::compile("cry", MatchMode::Word).unwrap();
        assert!(!matcher.is_match("a crystal vase"));
        assert!(matcher.is_match("i want to cry"));
    }

    #[test]
    fn phrase_regex_allows_extra_whitespace() {
        let regex = phrase_regex("too much work").unwrap();
        assert!(regex.is_match("there is TOO  much\twork today"));
        assert!(!regex.is_match("toomuchwork"));
    }
}
