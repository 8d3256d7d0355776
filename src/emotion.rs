use crate::error::Result;
use crate::lexicon::{Lexicon, MatchMode, Matcher};
use crate::models::{Category, CategoryScores};

pub struct EmotionClassifier {
    matchers: Vec<(Category, Vec<Matcher>)>,
}

impl EmotionClassifier {
    pub fn new(lexicon: &Lexicon, mode: MatchMode) -> Result<Self> {
        let mut matchers = Vec::with_capacity(lexicon.entries().len());
        for entry in lexicon.entries() {
            let compiled = entry
                .triggers
                .iter()
                .map(|trigger| Matcher::compile(trigger, mode))
                .collect::<Result<Vec<_>>>()?;
            matchers.push((entry.category, compiled));
        }
        Ok(Self { matchers })
    }

    /// Counts distinct triggers present per category. Repeats of the same
    /// trigger count once.
    pub fn score(&self, text: &str) -> CategoryScores {
        let text = text.to_lowercase();
        let mut scores = CategoryScores::default();

        for (category, matchers) in &self.matchers {
            let hits = matchers.iter().filter(|m| m.is_match(&text)).count();
            scores.set(*category, scores.get(*category) + hits);
        }

        scores
    }

    pub fn classify(&self, text: &str) -> Category {
        let scores = self.score(text);
        let category = pick_category(&scores);
        tracing::debug!(?scores, %category, "classified message");
        category
    }
}

/// Highest score wins; ties go to the earlier entry of `Category::SCORED`.
pub fn pick_category(scores: &CategoryScores) -> Category {
    if scores.is_empty() {
        return Category::Neutral;
    }

    Category::SCORED
        .into_iter()
        .find(|candidate| {
            let value = scores.get(*candidate);
            Category::SCORED
                .iter()
                .all(|other| value >= scores.get(*other))
        })
        .unwrap_or(Category::Neutral)
}
