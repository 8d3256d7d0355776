use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResponderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sad,
    Stressed,
    Anxious,
    Neutral,
}

impl Category {
    /// Scored categories in tie-break priority order.
    pub const SCORED: [Category; 3] = [Category::Sad, Category::Stressed, Category::Anxious];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sad => "sad",
            Category::Stressed => "stressed",
            Category::Anxious => "anxious",
            Category::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ResponderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sad" => Ok(Category::Sad),
            "stressed" => Ok(Category::Stressed),
            "anxious" => Ok(Category::Anxious),
            "neutral" => Ok(Category::Neutral),
            _ => Err(ResponderError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    High,
}

impl RiskLevel {
    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Normal => f.write_str("normal"),
            RiskLevel::High => f.write_str("high"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub sad: usize,
    pub stressed: usize,
    pub anxious: usize,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Sad => self.sad,
            Category::Stressed => self.stressed,
            Category::Anxious => self.anxious,
            Category::Neutral => 0,
        }
    }

    pub fn set(&mut self, category: Category, value: usize) {
        match category {
            Category::Sad => self.sad = value,
            Category::Stressed => self.stressed = value,
            Category::Anxious => self.anxious = value,
            Category::Neutral => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sad == 0 && self.stressed == 0 && self.anxious == 0
    }
}

/// Diagnostic view of how a message was judged.
///
/// `category` and `scores` are only filled in when the risk check passed;
/// a high-risk message never reaches the classifier.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub risk: RiskLevel,
    pub matched_phrase: Option<String>,
    pub category: Option<Category>,
    pub scores: Option<CategoryScores>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Safety(&'static str),
    Supportive { category: Category, text: String },
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Safety(message) => message,
            Reply::Supportive { text, .. } => text,
        }
    }

    pub fn is_safety(&self) -> bool {
        matches!(self, Reply::Safety(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_parse() {
        for category in [
            Category::Sad,
            Category::Stressed,
            Category::Anxious,
            Category::Neutral,
        ] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Sad ".parse::<Category>().unwrap(), Category::Sad);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "angry".parse::<Category>().unwrap_err();
        assert!(matches!(err, ResponderError::UnknownCategory(label) if label == "angry"));
    }

    #[test]
    fn scores_ignore_neutral() {
        let mut scores = CategoryScores::default();
        assert!(scores.is_empty());
        scores.set(Category::Neutral, 4);
        assert!(scores.is_empty());
        scores.set(Category::Anxious, 2);
        assert_eq!(scores.get(Category::Anxious), 2);
        assert_eq!(scores.get(Category::Neutral), 0);
    }
}
