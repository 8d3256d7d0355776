use regex::Regex;

use crate::error::Result;
use crate::lexicon::{phrase_regex, HIGH_RISK_PHRASES};
use crate::models::RiskLevel;

pub struct RiskDetector {
    patterns: Vec<(String, Regex)>,
}

impl RiskDetector {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self> {
        let patterns = phrases
            .iter()
            .map(|phrase| {
                let phrase = normalize(phrase.as_ref());
                phrase_regex(&phrase).map(|regex| (phrase, regex))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(HIGH_RISK_PHRASES)
    }

    /// First configured phrase found in `text`, in configuration order.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let text = normalize(text);
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(&text))
            .map(|(phrase, _)| phrase.as_str())
    }

    pub fn detect(&self, text: &str) -> RiskLevel {
        if self.first_match(text).is_some() {
            tracing::debug!("high-risk phrase detected");
            RiskLevel::High
        } else {
            RiskLevel::Normal
        }
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}
